//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Molo - migration status and database catalog tooling
#[derive(Parser, Debug)]
#[command(name = "molo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment to use (overrides the configured environment variable)
    #[arg(short, long, global = true)]
    pub env: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display status of migrations
    Status,

    /// Create a new migration in the first migration directory
    New(NewArgs),

    /// Print the current schema version
    Version,

    /// Fail if any migration on disk has not been applied
    Pending,

    /// Print the file that holds a migration version
    Locate(LocateArgs),

    /// List base tables (excluding views)
    Tables,

    /// List views
    Views,

    /// Print the select statement behind a view
    ViewDefinition(ViewDefinitionArgs),
}

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Snake-case migration name, e.g. add_field_to_form
    pub name: String,
}

/// Arguments for the locate command
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// 14-digit migration version
    pub version: String,
}

/// Arguments for the view-definition command
#[derive(Args, Debug)]
pub struct ViewDefinitionArgs {
    /// View name
    pub view: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
