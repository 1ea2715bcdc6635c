//! Command-line interface for inspecting sender options.

/// Subcommand implementations
pub mod commands;
/// Human and JSON rendering
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use commands::check::CheckArgs;
use commands::show::ShowArgs;

/// Top-level arguments
#[derive(Parser, Debug)]
#[command(name = "sender-options")]
#[command(about = "Inspect the sender configuration used for outgoing email", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .sender/config.yaml and .sender/local.yaml)
    #[arg(short, long, global = true, env = "SENDER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved sender configuration
    Show(ShowArgs),

    /// Fail unless the API key is set
    Check(CheckArgs),
}

/// Print `err` to stderr (or stdout as JSON) and exit with status 1
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "chain": err.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {}", style("error:").red().bold(), err);
        for cause in err.chain().skip(1) {
            eprintln!("  {} {}", style("caused by:").dim(), cause);
        }
    }
    std::process::exit(1);
}
