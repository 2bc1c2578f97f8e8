//! CLI command implementations

pub(crate) mod catalog;
pub(crate) mod common;
pub(crate) mod locate;
pub(crate) mod new;
pub(crate) mod pending;
pub(crate) mod status;
pub(crate) mod version;
