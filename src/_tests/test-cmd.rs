use super::app::cmd_app;
use super::CheckConfig;
use crate::s3w::S3Cred;

pub type Result<T> = core::result::Result<T, Error>;
pub type Error = Box<dyn std::error::Error>; // For early dev.

fn config_from_args(args: &[&str]) -> Result<CheckConfig> {
	let argm = cmd_app().try_get_matches_from([&["s3-conn-check"], args].concat())?;
	Ok(CheckConfig::from_argm(&argm)?)
}

#[test]
fn test_cmd_config_defaults() -> Result<()> {
	// -- Exec
	let config = config_from_args(&[])?;

	// -- Check
	assert_eq!(
		config,
		CheckConfig {
			hostname: "127.0.0.1".to_string(),
			port: "31949".to_string(),
			access_key_id: "sgiamadmin".to_string(),
			secret_access_key: "ldapadmin".to_string(),
		}
	);

	Ok(())
}

#[test]
fn test_cmd_config_override_all() -> Result<()> {
	// -- Exec
	let config = config_from_args(&["--hostname", "foo", "--port", "9000", "--access-key", "A", "--secret-key", "B"])?;

	// -- Check
	assert_eq!(config.hostname, "foo");
	assert_eq!(config.port, "9000");
	assert_eq!(config.access_key_id, "A");
	assert_eq!(config.secret_access_key, "B");

	Ok(())
}

#[test]
fn test_cmd_config_passthrough_no_validation() -> Result<()> {
	// -- Exec
	// not a valid host nor port, but still taken as is
	let config = config_from_args(&["--hostname", " my host ", "--port", "not-a-port"])?;

	// -- Check
	assert_eq!(config.hostname, " my host ");
	assert_eq!(config.port, "not-a-port");
	assert_eq!(config.access_key_id, "sgiamadmin");

	Ok(())
}

#[test]
fn test_cmd_unknown_arg_fails() -> Result<()> {
	let res = cmd_app().try_get_matches_from(["s3-conn-check", "--region", "us-west-2"]);

	assert!(res.is_err(), "--region is not a supported flag");

	Ok(())
}

#[test]
fn test_cmd_no_version_flag() -> Result<()> {
	let res = cmd_app().try_get_matches_from(["s3-conn-check", "--version"]);

	assert!(res.is_err(), "--version is not part of the cli surface");

	Ok(())
}

#[test]
fn test_cmd_endpoint_url() -> Result<()> {
	// -- Setup & Fixtures
	let mut config = config_from_args(&[])?;

	// -- Check
	assert_eq!(config.endpoint_url(), "http://127.0.0.1:31949");

	config.hostname = "h".to_string();
	config.port = "p".to_string();
	assert_eq!(config.endpoint_url(), "http://h:p");

	Ok(())
}

#[test]
fn test_cmd_config_into_s3_cred() -> Result<()> {
	// -- Setup & Fixtures
	let config = config_from_args(&["--hostname", "minio.local", "--port", "9000", "--access-key", "A", "--secret-key", "B"])?;

	// -- Exec
	let cred = S3Cred::from(config);

	// -- Check
	assert_eq!(cred.endpoint, "http://minio.local:9000");
	assert_eq!(cred.key_id, "A");
	assert_eq!(cred.key_secret, "B");
	assert!(cred.region.is_none());

	Ok(())
}
