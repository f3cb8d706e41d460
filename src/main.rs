//! `test-detectr` — find which .NET test framework and testing libraries a project uses.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Locate `.csproj` manifests ([`locator::find_manifests`]).
//! 4. Classify test projects and aggregate the environment ([`detector`], [`analyzer`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0` (environment ready) or `1` (at least one issue recorded).

mod analyzer;
mod cli;
mod config;
mod detector;
mod locator;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use log::info;

use cli::{Cli, ReportFormat};
use config::load_config;
use detector::detect_test_environment;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting test-detectr v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&cli.path, cli.config.as_deref())?;
    if let Some(depth) = cli.max_depth {
        config.scan.max_depth = depth;
    }

    let env = detect_test_environment(&cli.path, &config)?;

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&env, &cli.path, cli.quiet),
        ReportFormat::Json => report::json::render(&env)?,
    }

    if !env.is_ok() {
        std::process::exit(1);
    }

    Ok(())
}
