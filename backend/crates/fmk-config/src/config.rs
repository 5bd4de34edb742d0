use crate::{
    APP_DIR_NAME, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DatabaseConfig, ExportConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub export: ExportConfig,

    /// Directory the config was loaded from. Relative paths resolve here.
    #[serde(skip)]
    dir: PathBuf,
}

impl Config {
    /// Load config from the default directory.
    ///
    /// Loading order:
    /// 1. Resolve the directory (see [`Config::config_dir`])
    /// 2. Auto-create it if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FMK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(Self::config_dir()?)
    }

    /// Same as [`Config::load`] with an explicit directory, used for the
    /// `--config-dir` flag.
    pub fn load_from(config_dir: impl Into<PathBuf>) -> ConfigErrorResult<Self> {
        let config_dir = config_dir.into();

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.dir = config_dir;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FMK_CONFIG_DIR env var > <user data dir>/forget-me-knots
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoDataDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.export.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty when set"));
        }

        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> PathBuf {
        self.dir.join(&self.database.path)
    }

    /// Absolute path to the log file, if logging to a file.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.dir.display());
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  export: {} (pretty: {})",
            self.export.default_file_name, self.export.pretty
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("FMK_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("FMK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FMK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FMK_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("FMK_LOG_DIR", &mut self.logging.dir);

        // Export
        Self::apply_env_string(
            "FMK_EXPORT_DEFAULT_FILE_NAME",
            &mut self.export.default_file_name,
        );
        Self::apply_env_bool("FMK_EXPORT_PRETTY", &mut self.export.pretty);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
