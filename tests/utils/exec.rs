use anyhow::Result;
use std::process::{Command, Stdio};

const BIN_S3_CONN_CHECK: &str = env!("CARGO_BIN_EXE_s3-conn-check");

pub struct ExecOutput {
	pub success: bool,
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

pub fn exec_s3_check(args: &[&str], print_exec: bool) -> Result<ExecOutput> {
	if print_exec {
		println!("> executing: s3-conn-check {}", args.join(" "));
	}

	let output = Command::new(BIN_S3_CONN_CHECK)
		.args(args)
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.output()?;

	let res = ExecOutput {
		success: output.status.success(),
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
	};

	if print_exec {
		println!("->> stdout:\n{}\n->> stderr:\n{}", res.stdout, res.stderr);
	}

	Ok(res)
}
