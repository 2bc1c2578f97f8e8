//! Locate command implementation

use anyhow::Result;
use molo_core::locate_migration;

use crate::cli::{GlobalArgs, LocateArgs};
use crate::context::RuntimeContext;

/// Execute the locate command
pub async fn execute(args: &LocateArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let files = ctx.scan_migrations()?;
    let file = locate_migration(&files, &args.version, &ctx.migration_dirs())?;
    println!("{}", file.path.display());
    Ok(())
}
