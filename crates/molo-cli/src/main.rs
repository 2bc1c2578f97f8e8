//! Molo CLI - migration status reporting and database catalog queries

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::common::ExitCode;
use commands::{catalog, locate, new, pending, status, version};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match run(&cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => std::process::ExitCode::from(*code as u8),
            None => {
                eprintln!("Error: {err:#}");
                std::process::ExitCode::FAILURE
            }
        },
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::Status => status::execute(&cli.global).await,
        cli::Commands::New(args) => new::execute(args, &cli.global).await,
        cli::Commands::Version => version::execute(&cli.global).await,
        cli::Commands::Pending => pending::execute(&cli.global).await,
        cli::Commands::Locate(args) => locate::execute(args, &cli.global).await,
        cli::Commands::Tables => catalog::tables(&cli.global).await,
        cli::Commands::Views => catalog::views(&cli.global).await,
        cli::Commands::ViewDefinition(args) => catalog::view_definition(args, &cli.global).await,
    }
}

/// Install the env_logger backend.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output and
/// the config's `log_level` is applied once it has been loaded.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Trace)
        .format_timestamp(None);
    if std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    }
    if builder.try_init().is_err() {
        return;
    }
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }
}
