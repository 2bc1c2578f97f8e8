//! Version command implementation

use anyhow::Result;
use molo_core::AppliedVersions;

use crate::cli::GlobalArgs;
use crate::commands::common::load_applied;
use crate::context::RuntimeContext;

/// Execute the version command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let (_, db) = ctx.connect()?;

    let applied = load_applied(db.as_ref()).await?;
    println!("Current version: {}", current_version(&applied));
    Ok(())
}

/// Highest applied version, `0` when nothing is recorded.
pub(crate) fn current_version(applied: &AppliedVersions) -> &str {
    applied.latest().unwrap_or("0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version_uninitialized_is_zero() {
        assert_eq!(current_version(&AppliedVersions::Uninitialized), "0");
        assert_eq!(current_version(&AppliedVersions::Recorded(vec![])), "0");
    }

    #[test]
    fn test_current_version_picks_highest() {
        let applied = AppliedVersions::Recorded(vec![
            "20240301000000".to_string(),
            "20240101000000".to_string(),
        ]);
        assert_eq!(current_version(&applied), "20240301000000");
    }
}
