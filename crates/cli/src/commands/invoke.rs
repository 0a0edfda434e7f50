//! Dispatch a raw tool call.
//!
//! Takes the function name and argument JSON exactly as the chat endpoint
//! would send them, and prints the tool result.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use turn_manager::{TurnError, TurnManagerPlugin};

use super::DiceArgs;
use crate::config::CliConfig;
use crate::input::read_input;

/// Invoke a tool function with JSON arguments
#[derive(Parser, Debug)]
pub struct Invoke {
    /// Function name (e.g. calculateOutcome or TurnManagerPlugin-calculateOutcome)
    #[arg(value_name = "NAME")]
    name: String,

    /// Arguments JSON file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    dice: DiceArgs,
}

impl Invoke {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let arguments = read_input(self.input.as_deref())?;
        let plugin = TurnManagerPlugin::new(self.dice.build(config)?);

        match plugin.invoke(&self.name, &arguments) {
            Ok(result) => {
                println!("{result}");
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "Tool call failed: {}",
                    err
                );
                Err(err.into())
            }
        }
    }
}
