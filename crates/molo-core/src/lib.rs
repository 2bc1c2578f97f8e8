//! molo-core - Core library for Molo
//!
//! This crate provides configuration parsing, migration file discovery,
//! status reporting, and migration generation used by the `molo` CLI.

pub mod config;
pub mod error;
pub mod generate;
pub mod locate;
pub mod migration;
pub mod migration_version;
pub mod status;

pub use config::{Adapter, Config, DatabaseConfig, Environment, LogLevel};
pub use error::{CoreError, CoreResult};
pub use generate::generate_migration;
pub use locate::locate_migration;
pub use migration::{humanize, parse_migration_filename, MigrationFile, MigrationScanner};
pub use migration_version::MigrationVersion;
pub use status::{
    build_recorded_report, build_status_report, render_status_table, AppliedVersions,
    MigrationStatus, StatusOutcome, StatusReport, StatusRow,
};
