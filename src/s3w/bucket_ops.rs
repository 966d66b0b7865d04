use crate::prelude::*;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::Client;

/// One `ListBuckets` request. The full output (buckets, owner, request metadata) is returned untouched.
pub async fn list_buckets(client: &Client) -> Result<ListBucketsOutput> {
	let output = client.list_buckets().send().await?;
	Ok(output)
}
