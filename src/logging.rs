//! Process-wide logging setup.

use std::io::{self, IsTerminal};
use tracing::Level;

/// Log level for both this tool and the aws sdk crates (which log through `tracing` too).
pub const LOG_LEVEL: Level = Level::WARN;

/// Install the global `tracing` subscriber. Must be called once, before the client is built.
///
/// Logs go to stderr, stdout is reserved for the list buckets result.
pub fn init_logging() {
	tracing_subscriber::fmt()
		.with_max_level(LOG_LEVEL)
		.with_target(false)
		.with_ansi(io::stderr().is_terminal())
		.with_writer(io::stderr)
		.init();
}
