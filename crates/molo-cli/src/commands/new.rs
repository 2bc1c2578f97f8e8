//! New command implementation

use anyhow::{Context, Result};
use chrono::Utc;
use molo_core::generate_migration;

use crate::cli::{GlobalArgs, NewArgs};
use crate::context::{display_relative, RuntimeContext};

/// Execute the new command
pub async fn execute(args: &NewArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;

    let dir = ctx
        .migration_dirs()
        .into_iter()
        .next()
        .context("No migration directory configured")?;

    let path = generate_migration(&dir, &args.name, ctx.config.extension(), Utc::now())?;
    println!("Created migration {}", display_relative(&path, &ctx.root));
    Ok(())
}
