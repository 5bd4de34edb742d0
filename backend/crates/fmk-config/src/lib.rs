mod config;
mod database_config;
mod error;
mod export_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use export_config::ExportConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "FMK_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "forget-me-knots";

const DEFAULT_DATABASE_FILENAME: &str = "fmk.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = false;
const DEFAULT_EXPORT_FILE_NAME: &str = "projects-backup.json";
const DEFAULT_EXPORT_PRETTY: bool = true;
