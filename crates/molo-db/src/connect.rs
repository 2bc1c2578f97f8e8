//! Opening a backend for a configured environment

use crate::duckdb::DuckDbBackend;
use crate::error::{DbError, DbResult};
use crate::sqlite::SqliteBackend;
use crate::traits::Database;
use molo_core::{Adapter, DatabaseConfig};
use std::path::Path;
use std::sync::Arc;

const MEMORY_PATH: &str = ":memory:";

/// Resolve a configured database path against the project root.
fn resolve_path(config: &DatabaseConfig, root: &Path) -> String {
    match config.path.as_deref() {
        None | Some(MEMORY_PATH) => MEMORY_PATH.to_string(),
        Some(p) if Path::new(p).is_absolute() => p.to_string(),
        Some(p) => root.join(p).display().to_string(),
    }
}

/// Open the backend matching the configured adapter.
///
/// File databases are opened read-only and must already exist. Oracle and
/// SQL Server catalogs exist, but connecting to those engines is not
/// supported.
pub fn connect(config: &DatabaseConfig, root: &Path) -> DbResult<Arc<dyn Database>> {
    log::debug!("Opening {} database", config.adapter);
    let path = resolve_path(config, root);
    match config.adapter {
        Adapter::Sqlite if path == MEMORY_PATH => Ok(Arc::new(SqliteBackend::in_memory()?)),
        Adapter::Sqlite => Ok(Arc::new(SqliteBackend::open_read_only(Path::new(&path))?)),
        Adapter::DuckDb if path == MEMORY_PATH => Ok(Arc::new(DuckDbBackend::in_memory()?)),
        Adapter::DuckDb => Ok(Arc::new(DuckDbBackend::open_read_only(Path::new(&path))?)),
        Adapter::Oracle | Adapter::SqlServer => Err(DbError::NotImplemented {
            backend: config.adapter.to_string(),
            feature: "database connections".to_string(),
        }),
    }
}
