//! AIdecamp command line.
//!
//! Exercises the turn-manager tool without a chat endpoint: resolve a
//! scenario, print the tool schema, replay a raw tool call, or validate a
//! model reply.
//!
//! # Examples
//!
//! ```bash
//! # Resolve a scenario with a reproducible roll
//! aidecamp resolve scenario.json --seed 7
//!
//! # Check what a model sent back
//! aidecamp validate reply.json --format summary
//! ```

mod commands;
mod config;
mod input;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Invoke, Resolve, Schema, Validate};
use config::CliConfig;

/// Toy-soldier combat resolution tools
#[derive(Parser)]
#[command(name = "aidecamp")]
#[command(about = "Toy-soldier combat resolution tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve a scenario and print its outcome
    Resolve(Resolve),

    /// Print the calculateOutcome tool definition
    Schema(Schema),

    /// Invoke a tool function with JSON arguments
    Invoke(Invoke),

    /// Validate a model reply containing scenario and outcome
    Validate(Validate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AIDECAMP_* and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let _guard = logging::setup_logging(&config.log)?;
    tracing::debug!(seed = ?config.dice_seed, log_dir = ?config.log.dir, "Configuration loaded");

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(&config),
        Command::Schema(cmd) => cmd.execute(),
        Command::Invoke(cmd) => cmd.execute(&config),
        Command::Validate(cmd) => cmd.execute(),
    }
}
