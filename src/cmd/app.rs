use crate::consts::{DEFAULT_ACCESS_KEY, DEFAULT_HOSTNAME, DEFAULT_PORT, DEFAULT_SECRET_KEY};
use clap::{Arg, Command};

pub const ARG_HOSTNAME: &str = "hostname";
pub const ARG_PORT: &str = "port";
pub const ARG_ACCESS_KEY: &str = "access-key";
pub const ARG_SECRET_KEY: &str = "secret-key";

pub fn cmd_app() -> Command {
	Command::new("s3-conn-check")
		.about("Check the connection to an S3-compatible endpoint by listing its buckets (plain http, test environments only)")
		.arg(arg_hostname())
		.arg(arg_port())
		.args(args_credentials())
}

// region:    --- Endpoint Args
fn arg_hostname() -> Arg {
	Arg::new(ARG_HOSTNAME)
		.num_args(1)
		.long(ARG_HOSTNAME)
		.default_value(DEFAULT_HOSTNAME)
		.help("The endpoint hostname (or ip) of the S3 server.")
}

fn arg_port() -> Arg {
	Arg::new(ARG_PORT)
		.num_args(1)
		.long(ARG_PORT)
		.default_value(DEFAULT_PORT)
		.help("The endpoint port of the S3 server.")
}
// endregion: --- Endpoint Args

// region:    --- Credential Args
fn args_credentials() -> [Arg; 2] {
	[
		Arg::new(ARG_ACCESS_KEY)
			.num_args(1)
			.long(ARG_ACCESS_KEY)
			.default_value(DEFAULT_ACCESS_KEY)
			.help("The access key id used to sign the request."),
		Arg::new(ARG_SECRET_KEY)
			.num_args(1)
			.long(ARG_SECRET_KEY)
			.default_value(DEFAULT_SECRET_KEY)
			.help("The secret access key used to sign the request."),
	]
}
// endregion: --- Credential Args
