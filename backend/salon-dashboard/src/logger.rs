use crate::error::{DashboardError, Result};

use salon_config::{Config, LogLevel};
use salon_core::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::{Dispatch, Output};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Install the global `log` backend.
///
/// `log_file` of `None` writes to stdout; `colored` only applies there.
/// Fails if a logger is already installed.
#[track_caller]
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> Result<()> {
    let level_filter = log_level.0;

    let output: Output = match &log_file {
        Some(path) => fern::log_file(path)
            .map_err(|e| DashboardError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .into(),
        None => std::io::stdout().into(),
    };

    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            match &colors {
                Some(colors) => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    colors.color(record.level())
                )),
                None => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    record.level()
                )),
            }
        })
        .chain(output)
        .apply()
        .map_err(|e| DashboardError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

/// Initialize from the `[logging]` section, creating the log directory
/// when file output is configured.
#[track_caller]
pub fn initialize_from_config(config: &Config) -> Result<()> {
    let log_file = config.log_file_path()?;

    if let Some(parent) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| DashboardError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    initialize(config.logging.level, log_file, config.logging.colored)
}
