use aws_sdk_s3::error::DisplayErrorContext;
use cmd::cmd_run;

mod cmd;
mod consts;
mod error;
mod logging;
mod prelude;
mod s3w;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	if let Err(e) = cmd_run().await {
		eprintln!("Error:\n  {}", DisplayErrorContext(&e));
		std::process::exit(1);
	}
}
