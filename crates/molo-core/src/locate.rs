//! Finding the migration file that carries a version

use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationFile;
use std::path::PathBuf;

/// First discovered file with `version`; earlier directories win.
pub fn locate_migration<'a>(
    files: &'a [MigrationFile],
    version: &str,
    searched: &[PathBuf],
) -> CoreResult<&'a MigrationFile> {
    files
        .iter()
        .find(|f| f.version == version)
        .ok_or_else(|| CoreError::MigrationNotFound {
            version: version.to_string(),
            paths: searched
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration_version::MigrationVersion;

    fn file(dir: &str, version: &str) -> MigrationFile {
        MigrationFile {
            version: MigrationVersion::parse(version).unwrap(),
            name: "x".to_string(),
            path: PathBuf::from(format!("{dir}/{version}_x.rb")),
            directory: PathBuf::from(dir),
        }
    }

    #[test]
    fn test_locate_first_directory_wins() {
        let files = vec![
            file("a", "20230101000000"),
            file("b", "20230102000000"),
            file("c", "20230102000000"),
        ];
        let found = locate_migration(&files, "20230102000000", &[]).unwrap();
        assert_eq!(found.directory, PathBuf::from("b"));
    }

    #[test]
    fn test_locate_missing_lists_paths() {
        let files = vec![file("a", "20230101000000")];
        let err = locate_migration(
            &files,
            "20230109000000",
            &[PathBuf::from("db/migrations"), PathBuf::from("plugins/db")],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[M003] Migration 20230109000000 wasn't found on paths db/migrations, plugins/db"
        );
    }
}
