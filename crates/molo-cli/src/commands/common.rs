//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use molo_core::AppliedVersions;
use molo_db::Database;
use std::fmt;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Read the tracking table, with CLI-level error context.
pub(crate) async fn load_applied(db: &dyn Database) -> Result<AppliedVersions> {
    molo_db::applied_versions(db)
        .await
        .context("Failed to read applied migrations")
}
