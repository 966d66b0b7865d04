use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Invalid command. Cause: {0}")]
	CmdInvalid(&'static str),

	/// Kept as is (no code/message flattening) so the whole source chain reaches the operator.
	#[error(transparent)]
	AwsListBuckets(#[from] SdkError<ListBucketsError>),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}
