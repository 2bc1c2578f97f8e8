//! Strongly-typed migration version wrapper.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Number of digits in a migration version (`%Y%m%d%H%M%S`).
pub const VERSION_LEN: usize = 14;

/// A 14-digit, timestamp-based migration version such as `20230101000000`.
///
/// Kept as a string so that leading zeros and the exact spelling read from
/// file names and the tracking table compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MigrationVersion(String);

impl MigrationVersion {
    /// Create a version, rejecting anything that is not exactly 14 ASCII digits.
    pub fn parse(version: impl Into<String>) -> CoreResult<Self> {
        let s = version.into();
        if is_valid_version(&s) {
            Ok(Self(s))
        } else {
            Err(CoreError::InvalidVersion { version: s })
        }
    }

    /// Build a version from a UTC timestamp.
    pub fn from_timestamp(at: chrono::DateTime<chrono::Utc>) -> Self {
        Self(at.format("%Y%m%d%H%M%S").to_string())
    }

    /// Return the underlying version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

pub(crate) fn is_valid_version(s: &str) -> bool {
    s.len() == VERSION_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for MigrationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MigrationVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for MigrationVersion {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MigrationVersion {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MigrationVersion {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<MigrationVersion> for String {
    fn from(v: MigrationVersion) -> Self {
        v.0
    }
}

impl PartialEq<str> for MigrationVersion {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MigrationVersion {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
