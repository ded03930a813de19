//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use polls_application::IndexParams;
use polls_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use polls_domain::OutputFormat as FileOutputFormat;

/// File name of the default SQLite database inside the data directory
pub const DEFAULT_DATABASE_FILE: &str = "polls.sqlite3";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("index.latest_limit must be at least 1")]
    ZeroLatestLimit,

    #[error("storage.path cannot be empty")]
    EmptyStoragePath,

    #[error("logging.file cannot be empty")]
    EmptyLogFile,
}

/// Storage backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStorageBackend {
    /// SQLite database file
    #[default]
    Sqlite,
    /// Process memory, discarded on exit
    Memory,
}

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Which store to open
    pub backend: FileStorageBackend,
    /// SQLite database path (defaults to the platform data directory)
    pub path: Option<String>,
}

impl FileStorageConfig {
    /// Resolve the SQLite database path
    ///
    /// Returns the configured path, or `$XDG_DATA_HOME/polls/polls.sqlite3`
    /// when none is set.
    pub fn database_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|d| d.join("polls").join(DEFAULT_DATABASE_FILE)),
        }
    }
}

/// Raw index configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIndexConfig {
    /// Maximum number of questions on the index page
    pub latest_limit: usize,
}

impl Default for FileIndexConfig {
    fn default() -> Self {
        Self {
            latest_limit: IndexParams::default().latest_limit,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file
    pub file: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Storage settings
    pub storage: FileStorageConfig,
    /// Index page settings
    pub index: FileIndexConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.index.latest_limit == 0 {
            return Err(ConfigValidationError::ZeroLatestLimit);
        }

        if matches!(&self.storage.path, Some(path) if path.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyStoragePath);
        }

        if matches!(&self.logging.file, Some(file) if file.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyLogFile);
        }

        Ok(())
    }

    /// Listing parameters for the index use case
    pub fn index_params(&self) -> IndexParams {
        IndexParams::default().with_latest_limit(self.index.latest_limit)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
