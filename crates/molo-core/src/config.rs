//! Configuration types and parsing for molo.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main project configuration from molo.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories containing migration files, scanned in this order
    #[serde(default = "default_migration_paths")]
    pub migration_paths: Vec<String>,

    /// Extension of migration files (without the dot)
    #[serde(default = "default_migration_extension")]
    pub migration_extension: String,

    /// Location of the schema file
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    /// Environment variable consulted when no `--env` flag is given
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// Environment used when neither the flag nor the variable is set
    #[serde(default = "default_env")]
    pub default_env: String,

    /// Log level for library diagnostics
    #[serde(default)]
    pub log_level: LogLevel,

    /// Named database environments (development, test, production, ...)
    #[serde(default)]
    pub environments: BTreeMap<String, DatabaseConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migration_paths: default_migration_paths(),
            migration_extension: default_migration_extension(),
            schema_path: default_schema_path(),
            env_var: default_env_var(),
            default_env: default_env(),
            log_level: LogLevel::default(),
            environments: BTreeMap::new(),
        }
    }
}

/// Database adapter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adapter {
    /// SQLite file or in-memory database
    #[serde(alias = "sqlite3")]
    Sqlite,
    /// DuckDB file or in-memory database
    DuckDb,
    /// Oracle (enhanced adapter)
    #[serde(alias = "oracle_enhanced", alias = "oci")]
    Oracle,
    /// Microsoft SQL Server
    #[serde(alias = "mssql")]
    SqlServer,
}

impl std::fmt::Display for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Adapter::Sqlite => write!(f, "sqlite"),
            Adapter::DuckDb => write!(f, "duckdb"),
            Adapter::Oracle => write!(f, "oracle"),
            Adapter::SqlServer => write!(f, "sqlserver"),
        }
    }
}

/// Database connection configuration for one environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database engine
    pub adapter: Adapter,

    /// Logical database name, shown in reports
    #[serde(default)]
    pub database: Option<String>,

    /// File path for file-based engines (or `:memory:`)
    #[serde(default)]
    pub path: Option<String>,

    /// Server host for networked engines
    #[serde(default)]
    pub host: Option<String>,

    /// Login for networked engines
    #[serde(default)]
    pub username: Option<String>,
}

/// Log verbosity for library diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// A resolved environment: its name and database settings.
#[derive(Debug, Clone)]
pub struct Environment {
    pub name: String,
    pub database: DatabaseConfig,
}

impl Environment {
    /// Name printed in the `database:` header of the status report.
    pub fn display_name(&self) -> &str {
        self.database
            .database
            .as_deref()
            .or(self.database.path.as_deref())
            .unwrap_or(&self.name)
    }
}

fn default_migration_paths() -> Vec<String> {
    vec!["db/migrations".to_string()]
}

fn default_migration_extension() -> String {
    "rb".to_string()
}

fn default_schema_path() -> String {
    "db/schema.rb".to_string()
}

fn default_env_var() -> String {
    "MOLO_ENV".to_string()
}

fn default_env() -> String {
    "development".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io_at(path, e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for molo.yml or molo.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("molo.yml");
        let yaml_path = dir.join("molo.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    fn validate(&self) -> CoreResult<()> {
        if self.migration_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one migration_paths entry must be specified".to_string(),
            });
        }

        if self.migration_extension.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migration_extension cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get absolute migration paths relative to a project root, in configured order
    pub fn migration_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        self.migration_paths.iter().map(|p| root.join(p)).collect()
    }

    /// Get the absolute schema file path relative to a project root
    pub fn schema_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.schema_path)
    }

    /// Extension without any leading dot
    pub fn extension(&self) -> &str {
        self.migration_extension.trim_start_matches('.')
    }

    /// Pick the environment name.
    ///
    /// Priority: CLI flag > `env_var` in the process environment > `default_env`
    pub fn resolve_env_name(&self, cli_env: Option<&str>) -> String {
        cli_env
            .map(String::from)
            .or_else(|| std::env::var(&self.env_var).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| self.default_env.clone())
    }

    /// Resolve the environment to use and its database settings
    pub fn environment(&self, cli_env: Option<&str>) -> CoreResult<Environment> {
        let name = self.resolve_env_name(cli_env);
        let database = self
            .environments
            .get(&name)
            .cloned()
            .ok_or_else(|| CoreError::ConfigInvalid {
                message: format!(
                    "Environment '{}' not found. Available environments: {}",
                    name,
                    self.environments
                        .keys()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })?;
        log::debug!("Using environment '{}' ({})", name, database.adapter);
        Ok(Environment { name, database })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
