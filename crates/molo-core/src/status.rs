//! Migration status reporting
//!
//! Pairs discovered migration files with the versions recorded in the
//! tracking table and renders the fixed-width status table.

use crate::migration::MigrationFile;
use std::fmt;
use std::fmt::Write as _;

/// Name shown for applied versions that have no file on disk.
pub const NO_FILE: &str = "*** NO FILE ***";

/// Message printed when the tracking table has never been created.
pub const UNINITIALIZED_MESSAGE: &str = "Schema migrations table does not exist yet.";

/// Width of the centered status column.
const STATUS_WIDTH: usize = 8;

/// Width of the left-justified version column.
const VERSION_WIDTH: usize = 14;

/// Length of the divider under the column headers.
const DIVIDER_WIDTH: usize = 50;

/// Versions recorded in the tracking store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedVersions {
    /// The tracking table does not exist: nothing was ever applied.
    Uninitialized,
    /// Versions in the order the store returned them.
    Recorded(Vec<String>),
}

impl AppliedVersions {
    /// Highest recorded version, or `None` when nothing is recorded.
    pub fn latest(&self) -> Option<&str> {
        match self {
            AppliedVersions::Uninitialized => None,
            AppliedVersions::Recorded(versions) => versions
                .iter()
                .map(String::as_str)
                .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b))),
        }
    }
}

/// Whether a migration has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStatus {
    Up,
    Down,
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding must apply to the word itself, so go through `pad`.
        match self {
            MigrationStatus::Up => f.pad("up"),
            MigrationStatus::Down => f.pad("down"),
        }
    }
}

/// One line of the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub status: MigrationStatus,
    pub version: String,
    pub name: String,
}

impl StatusRow {
    /// True when the row describes an applied version with no file.
    pub fn is_orphan(&self) -> bool {
        self.name == NO_FILE
    }
}

/// Rows for one database plus the applied versions left without a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Database name shown in the header
    pub database: String,

    /// File rows first (directory then listing order), then orphan rows
    pub rows: Vec<StatusRow>,

    /// Applied versions that matched no file, in store order
    pub leftover: Vec<String>,
}

impl StatusReport {
    /// Rows for migrations that exist on disk but are not applied.
    pub fn pending(&self) -> impl Iterator<Item = &StatusRow> {
        self.rows
            .iter()
            .filter(|r| r.status == MigrationStatus::Down)
    }
}

/// Result of building a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// No tracking table: callers report it and stop.
    Uninitialized,
    Report(StatusReport),
}

/// Cross-reference discovered files with the applied versions.
///
/// A missing tracking table short-circuits to [`StatusOutcome::Uninitialized`].
pub fn build_status_report(
    database: &str,
    files: &[MigrationFile],
    applied: AppliedVersions,
) -> StatusOutcome {
    match applied {
        AppliedVersions::Uninitialized => StatusOutcome::Uninitialized,
        AppliedVersions::Recorded(versions) => {
            StatusOutcome::Report(build_recorded_report(database, files, versions))
        }
    }
}

/// Report for versions read from an existing tracking table.
///
/// Each applied version is consumed by the first file that carries it,
/// along with any repeated rows of that version in the store; a second file
/// with the same version is reported as `down`.
pub fn build_recorded_report(
    database: &str,
    files: &[MigrationFile],
    applied: Vec<String>,
) -> StatusReport {
    let mut remaining = applied;
    let mut rows = Vec::with_capacity(files.len() + remaining.len());
    for file in files {
        let before = remaining.len();
        remaining.retain(|v| v != file.version.as_str());
        let status = if remaining.len() < before {
            MigrationStatus::Up
        } else {
            MigrationStatus::Down
        };
        rows.push(StatusRow {
            status,
            version: file.version.to_string(),
            name: file.display_name(),
        });
    }

    for version in &remaining {
        rows.push(StatusRow {
            status: MigrationStatus::Up,
            version: version.clone(),
            name: NO_FILE.to_string(),
        });
    }

    StatusReport {
        database: database.to_string(),
        rows,
        leftover: remaining,
    }
}

/// Render the report as the fixed-width text table.
pub fn render_status_table(report: &StatusReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "database: {}", report.database);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:^sw$}  {:<vw$}  Migration Name",
        "Status",
        "Migration ID",
        sw = STATUS_WIDTH,
        vw = VERSION_WIDTH
    );
    let _ = writeln!(out, "{}", "-".repeat(DIVIDER_WIDTH));
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:^sw$}  {:<vw$}  {}",
            row.status,
            row.version,
            row.name,
            sw = STATUS_WIDTH,
            vw = VERSION_WIDTH
        );
    }
    let _ = writeln!(out);
    out
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
