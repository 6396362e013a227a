//! YakuLint CLI
//!
//! Extracts localized strings from JSON locale files and Vue `<i18n>` blocks.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;
use yakulint_core::PluginOptions;

use crate::cli::{Cli, Commands};
use crate::commands::{extensions::run_extensions, parse::run_parse};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = load_options(&cli)?;

    match cli.command {
        Commands::Parse {
            files,
            locales,
            resources,
            compact,
        } => run_parse(options, &files, locales, resources, compact),
        Commands::Extensions => run_extensions(&options),
    }
}

fn load_options(cli: &Cli) -> Result<PluginOptions> {
    match &cli.config {
        Some(path) => PluginOptions::from_file(path).into_diagnostic(),
        None => Ok(PluginOptions::new()),
    }
}
