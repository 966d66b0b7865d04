use crate::cmd::app::{cmd_app, ARG_ACCESS_KEY, ARG_HOSTNAME, ARG_PORT, ARG_SECRET_KEY};
use crate::consts::ENDPOINT_SCHEME;
use crate::logging::init_logging;
use crate::prelude::*;
use crate::s3w::{client_from_cred, list_buckets, S3Cred};
use clap::ArgMatches;
use std::io::{self, Write};
use tracing::{debug, info};

mod app;

/// The connection settings, taken verbatim from the command line (no validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
	pub hostname: String,
	pub port: String,
	pub access_key_id: String,
	pub secret_access_key: String,
}

impl CheckConfig {
	pub fn from_argm(argm: &ArgMatches) -> Result<CheckConfig> {
		Ok(CheckConfig {
			hostname: get_arg(argm, ARG_HOSTNAME)?,
			port: get_arg(argm, ARG_PORT)?,
			access_key_id: get_arg(argm, ARG_ACCESS_KEY)?,
			secret_access_key: get_arg(argm, ARG_SECRET_KEY)?,
		})
	}

	/// e.g., `http://127.0.0.1:31949`
	pub fn endpoint_url(&self) -> String {
		f!("{ENDPOINT_SCHEME}://{}:{}", self.hostname, self.port)
	}
}

impl From<CheckConfig> for S3Cred {
	fn from(config: CheckConfig) -> Self {
		let endpoint = config.endpoint_url();
		S3Cred {
			key_id: config.access_key_id,
			key_secret: config.secret_access_key,
			endpoint,
			region: None,
		}
	}
}

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();
	let config = CheckConfig::from_argm(&argm)?;

	init_logging();

	exec_check(config).await
}

/// Single pass: build the client, list the buckets, print the raw output.
async fn exec_check(config: CheckConfig) -> Result<()> {
	info!(endpoint = %config.endpoint_url(), access_key_id = %config.access_key_id, "checking s3 connection");

	let client = client_from_cred(S3Cred::from(config));

	debug!("sending list buckets request");
	let output = list_buckets(&client).await?;
	info!(buckets = output.buckets.as_ref().map_or(0, Vec::len), "list buckets done");

	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{output:#?}")?;

	Ok(())
}

// region:    Args Utils
fn get_arg(argm: &ArgMatches, name: &'static str) -> Result<String> {
	argm
		.get_one::<String>(name)
		.cloned()
		.ok_or(Error::CmdInvalid("Missing argument value (should have a default)"))
}
// endregion: Args Utils

#[cfg(test)]
#[path = "../_tests/test-cmd.rs"]
mod tests;
