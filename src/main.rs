//! sender-options CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use sender_options::cli::commands::{check, show};
use sender_options::cli::{handle_error, Cli, Commands};
use sender_options::infrastructure::logging::{LogConfig, LoggerImpl};
use sender_options::ConfigLoader;

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let log_config = LogConfig::try_from(&config.logging).context("Invalid logging configuration")?;
    let _logger = LoggerImpl::init(&log_config)?;

    match &cli.command {
        Commands::Show(args) => show::execute(args, &config, cli.json),
        Commands::Check(args) => check::execute(args, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        handle_error(&err, cli.json);
    }
}
