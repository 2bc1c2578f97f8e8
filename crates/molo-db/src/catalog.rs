//! Per-vendor catalog queries for base tables and views
//!
//! Each database engine keeps tables and views in a different system
//! catalog. A [`ViewCatalog`] knows the SQL for one engine and how to clean
//! up the view text it returns; execution goes through any [`Database`].

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use molo_core::Adapter;
use regex::Regex;
use std::sync::OnceLock;

/// Quote a string as a SQL literal, doubling embedded quotes.
pub(crate) fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Catalog access for one database engine.
#[async_trait]
pub trait ViewCatalog: Send + Sync {
    /// Engine this catalog speaks to
    fn adapter(&self) -> Adapter;

    /// Whether the engine supports views at all
    fn supports_views(&self) -> bool {
        true
    }

    /// Query returning the names of non-view tables
    fn base_tables_sql(&self) -> String;

    /// Query returning the names of views
    fn views_sql(&self) -> String;

    /// Query returning the stored definition of `view`
    fn view_definition_sql(&self, view: &str) -> String;

    /// Reduce the stored definition to the bare select statement
    fn clean_view_definition(&self, _view: &str, raw: &str) -> String {
        raw.to_string()
    }

    /// All non-view tables in the connected schema
    async fn base_tables(&self, db: &dyn Database) -> DbResult<Vec<String>> {
        db.query_strings(&self.base_tables_sql()).await
    }

    /// All views in the connected schema
    async fn views(&self, db: &dyn Database) -> DbResult<Vec<String>> {
        db.query_strings(&self.views_sql()).await
    }

    /// The select statement behind `view`
    async fn view_select_statement(&self, db: &dyn Database, view: &str) -> DbResult<String> {
        match db.query_optional_string(&self.view_definition_sql(view)).await? {
            Some(raw) => Ok(self.clean_view_definition(view, &raw)),
            None => Err(DbError::ViewNotFound(view.to_string())),
        }
    }
}

/// SQLite: everything lives in `sqlite_master`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteCatalog;

impl ViewCatalog for SqliteCatalog {
    fn adapter(&self) -> Adapter {
        Adapter::Sqlite
    }

    fn base_tables_sql(&self) -> String {
        "SELECT name FROM sqlite_master WHERE (type = 'table') AND NOT name = 'sqlite_sequence'"
            .to_string()
    }

    fn views_sql(&self) -> String {
        "SELECT name FROM sqlite_master WHERE type = 'view' AND NOT name = 'sqlite_sequence'"
            .to_string()
    }

    fn view_definition_sql(&self, view: &str) -> String {
        format!(
            "SELECT sql FROM sqlite_master WHERE name = {} AND NOT name = 'sqlite_sequence'",
            sql_literal(view)
        )
    }

    fn clean_view_definition(&self, view: &str, raw: &str) -> String {
        raw.replace(&format!("CREATE VIEW {} AS ", view), "")
    }
}

/// Oracle: the `USER_TABLES` and `USER_VIEWS` dictionary views.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleCatalog;

impl ViewCatalog for OracleCatalog {
    fn adapter(&self) -> Adapter {
        Adapter::Oracle
    }

    fn base_tables_sql(&self) -> String {
        "SELECT TABLE_NAME FROM USER_TABLES".to_string()
    }

    fn views_sql(&self) -> String {
        "SELECT VIEW_NAME FROM USER_VIEWS".to_string()
    }

    fn view_definition_sql(&self, view: &str) -> String {
        format!(
            "SELECT TEXT FROM USER_VIEWS WHERE VIEW_NAME = {}",
            sql_literal(view)
        )
    }
}

/// SQL Server: `information_schema`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerCatalog;

fn create_prefix_re() -> &'static Regex {
    static CREATE_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    CREATE_PREFIX_RE
        .get_or_init(|| Regex::new(r"(?im)^CREATE.* AS (select .*)").expect("valid regex"))
}

impl ViewCatalog for SqlServerCatalog {
    fn adapter(&self) -> Adapter {
        Adapter::SqlServer
    }

    fn base_tables_sql(&self) -> String {
        "SELECT table_name FROM information_schema.tables WHERE table_type = 'BASE TABLE'"
            .to_string()
    }

    fn views_sql(&self) -> String {
        "SELECT table_name FROM information_schema.views".to_string()
    }

    fn view_definition_sql(&self, view: &str) -> String {
        format!(
            "SELECT view_definition FROM information_schema.views WHERE table_name = {}",
            sql_literal(view)
        )
    }

    fn clean_view_definition(&self, _view: &str, raw: &str) -> String {
        create_prefix_re()
            .replacen(raw, 1, "$1")
            .replace('\n', "")
    }
}

/// DuckDB: `information_schema.tables` and `duckdb_views()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuckDbCatalog;

fn duckdb_view_prefix_re() -> &'static Regex {
    static DUCKDB_VIEW_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    DUCKDB_VIEW_PREFIX_RE.get_or_init(|| {
        Regex::new(r"(?is)^\s*CREATE\s+(?:OR\s+REPLACE\s+)?VIEW\s+.*?\s+AS\s+").expect("valid regex")
    })
}

impl ViewCatalog for DuckDbCatalog {
    fn adapter(&self) -> Adapter {
        Adapter::DuckDb
    }

    fn base_tables_sql(&self) -> String {
        "SELECT table_name FROM information_schema.tables WHERE table_type = 'BASE TABLE' ORDER BY table_name"
            .to_string()
    }

    fn views_sql(&self) -> String {
        "SELECT view_name FROM duckdb_views() WHERE NOT internal ORDER BY view_name".to_string()
    }

    fn view_definition_sql(&self, view: &str) -> String {
        format!(
            "SELECT sql FROM duckdb_views() WHERE NOT internal AND view_name = {}",
            sql_literal(view)
        )
    }

    fn clean_view_definition(&self, _view: &str, raw: &str) -> String {
        duckdb_view_prefix_re()
            .replace(raw, "")
            .trim_end()
            .trim_end_matches(';')
            .trim_end()
            .to_string()
    }
}

/// Pick the catalog for a configured adapter.
pub fn catalog_for(adapter: Adapter) -> Box<dyn ViewCatalog> {
    match adapter {
        Adapter::Sqlite => Box::new(SqliteCatalog),
        Adapter::DuckDb => Box::new(DuckDbCatalog),
        Adapter::Oracle => Box::new(OracleCatalog),
        Adapter::SqlServer => Box::new(SqlServerCatalog),
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
