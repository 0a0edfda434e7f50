//! Output rendering shared by the subcommands.

use anyhow::{Context, Result};
use serde::Serialize;
use turn_manager::turn_core::{Combatant, Outcome, Scenario};

/// Output format
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// One-line human-readable summary
    Summary,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// e.g. `standing pistol fires at crouched rifle (50 cm): 5 + 3 + 0 = 8, rolled 10 -> HIT`
pub fn summary(scenario: &Scenario, outcome: &Outcome) -> String {
    let distance = &scenario.distance;
    let estimated = if distance.estimated { ", estimated" } else { "" };

    format!(
        "{} fires at {} ({} {}{}): {} + {} + {} = {}, rolled {} -> {}",
        describe(&scenario.firing),
        describe(&scenario.target),
        distance.value,
        distance.unit,
        estimated,
        outcome.firing_modifier,
        outcome.target_modifier,
        outcome.distance_modifier,
        outcome.total_modifier(),
        outcome.rolled_dice,
        if outcome.hit_or_miss { "HIT" } else { "MISS" },
    )
}

fn describe(combatant: &Combatant) -> String {
    format!("{} {}", combatant.pose, combatant.weapon)
}
