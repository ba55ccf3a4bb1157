use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::AppError;

/// Installs a file logger when a path is given.
///
/// The terminal belongs to the game screen, so log records never go to
/// stdout or stderr. Without a path no logger is installed and the `log`
/// macros compile down to level checks.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, config, file)?;
    Ok(())
}
