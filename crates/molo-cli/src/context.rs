//! Runtime context for CLI commands

use anyhow::{Context, Result};
use molo_core::{Config, Environment, MigrationFile, MigrationScanner};
use molo_db::Database;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Loaded configuration plus the options every command shares
pub struct RuntimeContext {
    /// Absolute project root
    pub root: PathBuf,

    /// Parsed molo.yml
    pub config: Config,

    /// Verbose output enabled
    pub verbose: bool,

    cli_env: Option<String>,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let root = if args.project_dir.is_absolute() {
            args.project_dir.clone()
        } else {
            std::env::current_dir()?.join(&args.project_dir)
        };

        // Load config from custom path or project directory
        let config = match &args.config {
            Some(config_path) => {
                Config::load(config_path).context("Failed to load configuration file")?
            }
            None => Config::load_from_dir(&root).context("Failed to load project configuration")?,
        };

        if !args.verbose && std::env::var_os("RUST_LOG").is_none() {
            log::set_max_level(config.log_level.into());
        }

        Ok(Self {
            root,
            config,
            verbose: args.verbose,
            cli_env: args.env.clone(),
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// The environment selected by flag, environment variable, or default
    pub fn environment(&self) -> Result<Environment> {
        Ok(self.config.environment(self.cli_env.as_deref())?)
    }

    /// Open the database for the selected environment
    pub fn connect(&self) -> Result<(Environment, Arc<dyn Database>)> {
        let env = self.environment()?;
        self.verbose(&format!(
            "Connecting to '{}' ({})",
            env.name, env.database.adapter
        ));
        let db = molo_db::connect(&env.database, &self.root)
            .with_context(|| format!("Failed to connect to database for '{}'", env.name))?;
        Ok((env, db))
    }

    /// Configured migration directories, absolute, in order
    pub fn migration_dirs(&self) -> Vec<PathBuf> {
        self.config.migration_paths_absolute(&self.root)
    }

    /// Discover migration files across all configured directories
    pub fn scan_migrations(&self) -> Result<Vec<MigrationFile>> {
        let dirs = self.migration_dirs();
        for dir in &dirs {
            self.verbose(&format!("Scanning {}", display_relative(dir, &self.root)));
        }
        let files = MigrationScanner::new(self.config.extension())
            .scan(&dirs)
            .context("Failed to list migration files")?;
        Ok(files)
    }
}

/// Show `path` relative to `root` when it lives inside it.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
