//! molo-db - Database abstraction layer for Molo
//!
//! This crate provides the `Database` trait with DuckDB and SQLite
//! implementations, per-vendor view catalogs, and access to the
//! `schema_migrations` tracking table.

pub mod catalog;
pub mod connect;
pub mod duckdb;
pub mod error;
pub mod sqlite;
pub mod traits;
pub mod tracking;

pub use catalog::{
    catalog_for, DuckDbCatalog, OracleCatalog, SqlServerCatalog, SqliteCatalog, ViewCatalog,
};
pub use connect::connect;
pub use crate::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use sqlite::SqliteBackend;
pub use traits::Database;
pub use tracking::{applied_versions, SCHEMA_MIGRATIONS_TABLE};
