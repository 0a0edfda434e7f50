//! Validate a model reply.
//!
//! Strictly parses `{ "scenario": ..., "outcome": ... }`, then checks that
//! the outcome agrees with the combat rules. Exits non-zero on rejection.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use turn_manager::{CombatResult, ResponseError, TurnError, parse_combat_result};

use crate::input::read_input;
use crate::output::{OutputFormat, print_json, summary};

/// Validate a model reply containing scenario and outcome
#[derive(Parser, Debug)]
pub struct Validate {
    /// Reply JSON file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Skip the consistency check against the modifier tables
    #[arg(long)]
    no_verify: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let content = read_input(self.input.as_deref())?;

        let result = check(&content, !self.no_verify).map_err(|err| {
            tracing::error!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                "Reply rejected: {}",
                err
            );
            err
        })?;

        tracing::info!(hit = result.outcome.hit_or_miss, "Reply accepted");

        match self.format {
            OutputFormat::Json => print_json(&result),
            OutputFormat::Summary => {
                println!("{}", summary(&result.scenario, &result.outcome));
                Ok(())
            }
        }
    }
}

fn check(content: &str, verify: bool) -> Result<CombatResult, ResponseError> {
    let result = parse_combat_result(content)?;
    if verify {
        result.verify()?;
    }
    Ok(result)
}
