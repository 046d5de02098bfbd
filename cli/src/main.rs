//! Sundry CLI - sequence pipelines over integers from the command line.
//!
//! Startup order:
//! 1. Load `~/.sundry/config.toml` (or `$SUNDRY_CONFIG`)
//! 2. Initialize tracing on stderr, honoring `RUST_LOG` first
//! 3. Parse arguments and run one subcommand
//! 4. Print the rendered result to stdout

mod commands;

use std::io::{Write, stdout};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sundry_config::SundryConfig;

use crate::commands::{Cli, Settings, run};

fn init_tracing(config_filter: Option<&str>, init_warnings: Vec<String>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
}

fn main() -> Result<()> {
    let mut init_warnings = Vec::new();
    let config = match SundryConfig::load() {
        Ok(config) => config,
        Err(err) => {
            init_warnings.push(format!("Ignoring config: {err}"));
            None
        }
    };

    init_tracing(
        config.as_ref().and_then(SundryConfig::log_filter),
        init_warnings,
    );

    let cli = Cli::parse();
    let settings = Settings::from_config(config.as_ref());
    tracing::debug!(?settings, command = ?cli.command, "Running command");

    let output = run(&cli.command, settings).into_result()?;
    let mut out = stdout().lock();
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
