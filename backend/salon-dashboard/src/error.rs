use salon_config::ConfigError;
use salon_core::{CoreError, ErrorLocation};
use salon_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("{message} {location}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },

    #[error("{entity} {id} is no longer available {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Config error: {source} {location}")]
    Config {
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl DashboardError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &'static str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text shown to the user, without the source location.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::NotFound { entity, .. } => format!("The {entity} is no longer available"),
            Self::Store { source, .. } => match source {
                DbError::Core { source, .. } => Self::core_message(source),
                DbError::NotFound { entity, .. } => {
                    format!("The {entity} is no longer available")
                }
                _ => String::new(),
            },
            Self::Core { source, .. } => Self::core_message(source),
            Self::Config { .. } | Self::Logger { .. } => String::new(),
        }
    }

    fn core_message(error: &CoreError) -> String {
        match error {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InsufficientStock {
                product,
                requested,
                available,
                ..
            } => format!(
                "Insufficient stock for {product}: requested {requested}, available {available}"
            ),
            _ => String::new(),
        }
    }
}

impl From<DbError> for DashboardError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DashboardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for DashboardError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
