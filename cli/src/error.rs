use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no page is mounted at '{0}'")]
    UnknownRoute(String),

    #[error("{failed} of {total} page sources failed to check")]
    CheckFailed { failed: usize, total: usize },

    #[error("'{}' has errors", path.display())]
    InvalidSource { path: PathBuf },

    #[error("cannot start logging: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}
