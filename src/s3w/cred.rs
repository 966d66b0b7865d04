use crate::consts::{CRED_PROVIDER_NAME, SIGNING_REGION};
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::Client;

/// Static credentials bound to an explicit endpoint.
#[derive(Debug, Clone)]
pub struct S3Cred {
	pub key_id: String,
	pub key_secret: String,
	pub endpoint: String,
	/// When None, the fixed signing region is used.
	pub region: Option<String>,
}

/// Build the client for a custom (S3-compatible) endpoint.
///
/// Notes:
/// - Path style addressing, since most S3-compatible servers do not serve virtual-hosted buckets.
/// - No retry, the check reports the outcome of exactly one request.
pub fn client_from_cred(s3_cred: S3Cred) -> Client {
	let S3Cred {
		key_id,
		key_secret,
		endpoint,
		region,
	} = s3_cred;

	let cred = Credentials::new(key_id, key_secret, None, None, CRED_PROVIDER_NAME);
	let region = region.unwrap_or_else(|| SIGNING_REGION.to_string());

	let config = Builder::new()
		.behavior_version(BehaviorVersion::latest())
		.credentials_provider(cred)
		.endpoint_url(endpoint)
		.region(Region::new(region))
		.force_path_style(true)
		.retry_config(RetryConfig::disabled())
		.build();

	Client::from_conf(config)
}

#[cfg(test)]
#[path = "../_tests/test-cred.rs"]
mod tests;
