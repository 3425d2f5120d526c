//! Stderr logging for the CLI.
//!
//! `RUST_LOG` wins when set; otherwise the level follows the `-v` count.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::CliError;

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start the logger. Keep the handle alive for the life of the process.
pub fn init(verbosity: u8) -> Result<LoggerHandle, CliError> {
    let handle = Logger::try_with_env_or_str(level_for(verbosity))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}
