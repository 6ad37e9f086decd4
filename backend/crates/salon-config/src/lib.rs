mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod schedule_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use schedule_config::ScheduleConfig;

const CONFIG_DIR_ENV: &str = "SALON_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".salon";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_TENANT_DIRECTORY: &str = "tenants";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_OPENING_TIME: &str = "08:00";
const DEFAULT_CLOSING_TIME: &str = "20:00";
