#![allow(unused)]

// --- Re-exports
pub use exec::{exec_s3_check, ExecOutput};
pub use axum::http::StatusCode;
pub use stub::{unused_port, S3Stub, XML_EMPTY_BUCKETS, XML_INVALID_ACCESS_KEY, XML_TWO_BUCKETS};

// --- Imports
use std::str::Lines;

// --- Sub-Modules
mod exec;

// region:    --- String Utils
// Note: Personal best practice, "x" prefix to note that this is just private crate interface.

pub trait XString {
	fn x_lines(&self) -> Lines;
	fn x_has_line_containing(&self, part: &str) -> bool;
}

impl XString for str {
	/// Return the str::Lines but for the trimmed text (so no starting or ending empty lines)
	fn x_lines(&self) -> Lines {
		self.trim().lines()
	}

	fn x_has_line_containing(&self, part: &str) -> bool {
		self.x_lines().any(|l| l.contains(part))
	}
}

impl XString for String {
	fn x_lines(&self) -> Lines {
		str::x_lines(self)
	}

	fn x_has_line_containing(&self, part: &str) -> bool {
		str::x_has_line_containing(self, part)
	}
}
// endregion: --- String Utils
