//! Migration file discovery
//!
//! Migration files are named `<14-digit UTC timestamp>_<snake_case_name>.<ext>`
//! and live directly inside one or more migration directories. Anything that
//! does not match that shape is ignored.

use crate::error::{CoreError, CoreResult};
use crate::migration_version::MigrationVersion;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A migration file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Version parsed from the file name
    pub version: MigrationVersion,

    /// Descriptive name with underscores replaced by spaces (`create users`)
    pub name: String,

    /// Full path of the file
    pub path: PathBuf,

    /// Migration directory the file was found in
    pub directory: PathBuf,
}

impl MigrationFile {
    /// Name as shown in the status table (`Create users`).
    pub fn display_name(&self) -> String {
        humanize(&self.name)
    }
}

/// Filename matcher for one migration file extension.
#[derive(Debug, Clone)]
pub struct MigrationScanner {
    pattern: Regex,
}

impl MigrationScanner {
    /// Build a scanner for files ending in `.<extension>`.
    pub fn new(extension: &str) -> Self {
        let ext = regex::escape(extension.trim_start_matches('.'));
        let pattern =
            Regex::new(&format!(r"^(\d{{14}})_(.+)\.{ext}$")).expect("escaped extension is a valid regex");
        Self { pattern }
    }

    /// Split a file name into version and spaced name, or `None` if it is not a migration.
    pub fn parse_file_name(&self, file_name: &str) -> Option<(MigrationVersion, String)> {
        let caps = self.pattern.captures(file_name)?;
        let version = MigrationVersion::parse(&caps[1]).ok()?;
        let name = caps[2].replace('_', " ");
        Some((version, name))
    }

    /// List migration files in `dir`, in the order the filesystem returns them.
    pub fn scan_dir(&self, dir: &Path) -> CoreResult<Vec<MigrationFile>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| CoreError::io_at(dir, e))? {
            let entry = entry.map_err(|e| CoreError::io_at(dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match self.parse_file_name(file_name) {
                Some((version, name)) => files.push(MigrationFile {
                    version,
                    name,
                    directory: dir.to_path_buf(),
                    path,
                }),
                None => log::debug!("Skipping non-migration file {}", path.display()),
            }
        }
        Ok(files)
    }

    /// Scan every directory in order and concatenate the results.
    ///
    /// Files are not sorted by version: directory order first, then listing order.
    pub fn scan(&self, dirs: &[PathBuf]) -> CoreResult<Vec<MigrationFile>> {
        let mut files = Vec::new();
        for dir in dirs {
            files.extend(self.scan_dir(dir)?);
        }
        Ok(files)
    }
}

impl Default for MigrationScanner {
    fn default() -> Self {
        Self::new("rb")
    }
}

/// Parse a migration file name with the given extension.
pub fn parse_migration_filename(file_name: &str, extension: &str) -> Option<(MigrationVersion, String)> {
    MigrationScanner::new(extension).parse_file_name(file_name)
}

/// Turn a migration name into a sentence: `add_user_id` becomes `Add user`.
///
/// Drops leading underscores and a trailing `_id`, turns underscores into
/// spaces, lowercases, and capitalizes the first letter. Names that already
/// use spaces are handled the same way.
pub fn humanize(name: &str) -> String {
    let spaced = name.trim_start_matches('_').replace('_', " ");
    let trimmed = spaced.strip_suffix(" id").unwrap_or(&spaced);
    let lowered = trimmed.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
