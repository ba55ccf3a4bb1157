use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid command-line configuration.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small (minimum {min_width}x{min_height})")]
    GridTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("grid {width}x{height} is too large (maximum {max_width}x{max_height})")]
    GridTooLarge {
        width: u16,
        height: u16,
        max_width: u16,
        max_height: u16,
    },
}

/// Failures that abort the process before or during the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}
