//! Status command implementation

use anyhow::Result;
use molo_core::status::UNINITIALIZED_MESSAGE;
use molo_core::{build_status_report, render_status_table, AppliedVersions, StatusOutcome};

use crate::cli::GlobalArgs;
use crate::commands::common::load_applied;
use crate::context::{display_relative, RuntimeContext};

/// Execute the status command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let (env, db) = ctx.connect()?;
    ctx.verbose(&format!(
        "Schema file: {}",
        display_relative(&ctx.config.schema_path_absolute(&ctx.root), &ctx.root)
    ));

    // Files are only listed once the tracking table is known to exist
    let outcome = match load_applied(db.as_ref()).await? {
        AppliedVersions::Uninitialized => StatusOutcome::Uninitialized,
        recorded => build_status_report(env.display_name(), &ctx.scan_migrations()?, recorded),
    };

    match outcome {
        StatusOutcome::Uninitialized => println!("{}", UNINITIALIZED_MESSAGE),
        StatusOutcome::Report(report) => {
            ctx.verbose(&format!(
                "{} migrations, {} pending, {} without a file",
                report.rows.len(),
                report.pending().count(),
                report.leftover.len()
            ));
            print!("{}", render_status_table(&report));
        }
    }
    Ok(())
}
