//! Resolve a scenario file offline.
//!
//! Reads a Scenario JSON (the object the model passes as `scenario`) and
//! prints the outcome exactly as the tool would return it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use turn_manager::turn_core::Scenario;
use turn_manager::{CombatResult, TurnManagerPlugin};

use super::DiceArgs;
use crate::config::CliConfig;
use crate::input::read_input;
use crate::output::{OutputFormat, print_json, summary};

/// Resolve a scenario and print its outcome
#[derive(Parser, Debug)]
pub struct Resolve {
    /// Scenario JSON file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    dice: DiceArgs,

    /// Print the scenario alongside the outcome
    #[arg(long)]
    with_scenario: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

impl Resolve {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = read_input(self.input.as_deref())?;
        let scenario: Scenario =
            serde_json::from_str(&content).context("Input is not a valid scenario")?;

        let plugin = TurnManagerPlugin::new(self.dice.build(config)?);
        let outcome = plugin.calculate_outcome(&scenario);

        match self.format {
            OutputFormat::Summary => println!("{}", summary(&scenario, &outcome)),
            OutputFormat::Json if self.with_scenario => {
                print_json(&CombatResult { scenario, outcome })?
            }
            OutputFormat::Json => print_json(&outcome)?,
        }

        Ok(())
    }
}
