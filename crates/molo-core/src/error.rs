//! Error types for molo-core

use thiserror::Error;

/// Core error type for Molo
#[derive(Error, Debug)]
pub enum CoreError {
    /// M001: Configuration file not found
    #[error("[M001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// M002: Invalid configuration value
    #[error("[M002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// M003: Migration version not present in any migration directory
    #[error("[M003] Migration {version} wasn't found on paths {paths}")]
    MigrationNotFound { version: String, paths: String },

    /// M004: Migration name is not usable in a file name
    #[error("[M004] Invalid migration name '{name}': {reason}")]
    InvalidMigrationName { name: String, reason: String },

    /// M005: Generated migration would overwrite an existing file
    #[error("[M005] Migration file already exists: {path}")]
    MigrationExists { path: String },

    /// M006: Malformed migration version
    #[error("[M006] Invalid migration version '{version}': expected 14 digits")]
    InvalidVersion { version: String },

    /// M007: IO error
    #[error("[M007] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// M008: IO error with file path context
    #[error("[M008] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// M009: YAML parse error
    #[error("[M009] Failed to parse config: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Attach a path to an IO error.
    pub(crate) fn io_at(path: &std::path::Path, source: std::io::Error) -> Self {
        CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        }
    }
}
