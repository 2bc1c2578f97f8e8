//! New migration file generation

use crate::error::{CoreError, CoreResult};
use crate::migration_version::MigrationVersion;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Check that `name` can be used as the `<name>` part of a migration file.
pub fn validate_migration_name(name: &str) -> CoreResult<()> {
    let invalid = |reason: &str| CoreError::InvalidMigrationName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("must provide a name, e.g. add_field_to_form"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("only letters, digits and underscores are allowed"));
    }
    if name.chars().all(|c| c == '_') {
        return Err(invalid("name needs at least one letter or digit"));
    }
    Ok(())
}

/// `add_field_to_form` -> `AddFieldToForm`
pub fn class_name(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let lower = part.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// File body for a new migration, chosen by extension.
pub fn migration_template(name: &str, extension: &str) -> String {
    match extension {
        "rb" => format!(
            "class {} < ActiveRecord::Migration\n  def self.up\n  end\n\n  def self.down\n    raise ActiveRecord::IrreversibleMigration\n  end\nend\n",
            class_name(name)
        ),
        "sql" => format!("-- Migration: {}\n\n-- Up\n\n\n-- Down\n\n", name),
        _ => String::new(),
    }
}

/// Write a new migration named `name` into `dir`, stamped with `now`.
///
/// Creates `dir` if needed and never overwrites an existing file.
pub fn generate_migration(
    dir: &Path,
    name: &str,
    extension: &str,
    now: DateTime<Utc>,
) -> CoreResult<PathBuf> {
    validate_migration_name(name)?;
    let extension = extension.trim_start_matches('.');

    std::fs::create_dir_all(dir).map_err(|e| CoreError::io_at(dir, e))?;

    let version = MigrationVersion::from_timestamp(now);
    let path = dir.join(format!("{}_{}.{}", version, name, extension));
    if path.exists() {
        return Err(CoreError::MigrationExists {
            path: path.display().to_string(),
        });
    }

    std::fs::write(&path, migration_template(name, extension))
        .map_err(|e| CoreError::io_at(&path, e))?;
    log::debug!("Wrote migration {}", path.display());
    Ok(path)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
