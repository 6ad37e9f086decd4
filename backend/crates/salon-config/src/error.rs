use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::generic("Config", message)
    }

    #[track_caller]
    pub fn database(message: impl Into<String>) -> Self {
        Self::generic("Database", message)
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::generic("Logging", message)
    }

    /// Business hours in the `[schedule]` section.
    #[track_caller]
    pub fn schedule(message: impl Into<String>) -> Self {
        Self::generic("Schedule", message)
    }

    #[track_caller]
    fn generic(category: &'static str, message: impl Into<String>) -> Self {
        Self::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
