//! # username-check
//!
//! Command-line front end for the username registry.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (stderr, `RUST_LOG`, default `info`)
//! 2. Load configuration (defaults → `--config` → `UC_*` env → flags)
//! 3. Open the registry: read the names file, seed any shortfall, build the filter
//! 4. Run the requested action, or the interactive prompt
//!
//! Results go to stdout; logs go to stderr.

mod cli;
mod commands;
mod config;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use username_registry::{FileNameStore, RegistryMetrics, UsernameRegistry};

use crate::cli::{Args, Command};
use crate::commands::Session;
use crate::config::load_config;

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let args = Args::parse();
    let config = load_config(&args).context("Invalid configuration")?;
    info!(names_file = %config.names_file.display(), "Opening username registry");

    let store = Arc::new(FileNameStore::new(&config.names_file));
    let metrics = Arc::new(RegistryMetrics::new());
    let registry = UsernameRegistry::open_with_metrics(&config, store, metrics.clone())
        .context("Failed to open username registry")?;

    let session = Session {
        registry: &registry,
        metrics: &metrics,
        default_samples: config.performance_samples,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            session.run_interactive(stdin.lock(), &mut out)?;
        }
        command => session.execute(&command, &mut out)?,
    }

    Ok(())
}
