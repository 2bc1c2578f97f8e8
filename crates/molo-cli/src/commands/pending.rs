//! Pending command implementation

use anyhow::Result;
use molo_core::{build_recorded_report, AppliedVersions, StatusRow};
use std::fmt::Write as _;

use crate::cli::GlobalArgs;
use crate::commands::common::{load_applied, ExitCode};
use crate::context::RuntimeContext;

/// Execute the pending command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let (env, db) = ctx.connect()?;

    // A missing tracking table means every file is pending
    let applied = match load_applied(db.as_ref()).await? {
        AppliedVersions::Recorded(versions) => versions,
        AppliedVersions::Uninitialized => Vec::new(),
    };
    let files = ctx.scan_migrations()?;
    let report = build_recorded_report(env.display_name(), &files, applied);

    let pending: Vec<&StatusRow> = report.pending().collect();
    if pending.is_empty() {
        ctx.verbose("No pending migrations");
        return Ok(());
    }

    print!("{}", format_pending(&pending));
    eprintln!("Run your migrations to resolve the issue.");
    Err(ExitCode(1).into())
}

/// The pending-migration summary, one indented line per migration.
pub(crate) fn format_pending(pending: &[&StatusRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "You have {} pending migrations:", pending.len());
    for row in pending {
        let _ = writeln!(out, "  {:>4} {}", row.version, row.name);
    }
    out
}

#[cfg(test)]
#[path = "pending_test.rs"]
mod tests;
