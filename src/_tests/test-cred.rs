use super::{client_from_cred, S3Cred};

fn fx_cred(region: Option<&str>) -> S3Cred {
	S3Cred {
		key_id: "sgiamadmin".to_string(),
		key_secret: "ldapadmin".to_string(),
		endpoint: "http://127.0.0.1:31949".to_string(),
		region: region.map(String::from),
	}
}

#[tokio::test]
async fn test_cred_client_default_signing_region() {
	let client = client_from_cred(fx_cred(None));

	let region = client.config().region().map(|r| r.as_ref().to_string());
	assert_eq!(region.as_deref(), Some("us-east-1"));
}

#[tokio::test]
async fn test_cred_client_explicit_region() {
	let client = client_from_cred(fx_cred(Some("eu-west-3")));

	let region = client.config().region().map(|r| r.as_ref().to_string());
	assert_eq!(region.as_deref(), Some("eu-west-3"));
}
