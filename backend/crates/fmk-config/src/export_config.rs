use crate::{ConfigError, ConfigErrorResult, DEFAULT_EXPORT_FILE_NAME, DEFAULT_EXPORT_PRETTY};

use serde::Deserialize;

/// Settings for the JSON backup file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name the host suggests in its save dialog.
    pub default_file_name: String,
    /// Indent the written JSON.
    pub pretty: bool,
}

impl ExportConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name = self.default_file_name.trim();

        if name.is_empty() {
            return Err(ConfigError::export("export.default_file_name cannot be empty"));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(ConfigError::export(
                "export.default_file_name must be a file name, not a path",
            ));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_file_name: String::from(DEFAULT_EXPORT_FILE_NAME),
            pretty: DEFAULT_EXPORT_PRETTY,
        }
    }
}
