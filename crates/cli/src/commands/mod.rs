mod invoke;
mod resolve;
mod schema;
mod validate;

pub use invoke::Invoke;
pub use resolve::Resolve;
pub use schema::Schema;
pub use validate::Validate;

use anyhow::{Context, Result};
use turn_manager::turn_core::{DiceRoller, FixedDice, SeededDice, ThreadDice};

use crate::config::CliConfig;

/// Dice selection flags shared by commands that roll.
#[derive(clap::Args, Debug)]
pub struct DiceArgs {
    /// Seed for reproducible rolls (overrides AIDECAMP_DICE_SEED)
    #[arg(long, value_name = "SEED", conflicts_with = "roll")]
    seed: Option<u64>,

    /// Force the die to show this value
    #[arg(long, value_name = "1-19", value_parser = clap::value_parser!(u32).range(1..=19))]
    roll: Option<u32>,
}

impl DiceArgs {
    /// Pick the dice: forced roll, then flag seed, then configured seed,
    /// then the thread-local generator.
    pub fn build(&self, config: &CliConfig) -> Result<Box<dyn DiceRoller>> {
        if let Some(roll) = self.roll {
            tracing::debug!(roll, "Using fixed dice");
            let dice = FixedDice::constant(roll).context("Roll must be between 1 and 19")?;
            return Ok(Box::new(dice));
        }

        match self.seed.or(config.dice_seed) {
            Some(seed) => {
                tracing::debug!(seed, "Using seeded dice");
                Ok(Box::new(SeededDice::from_seed(seed)))
            }
            None => Ok(Box::new(ThreadDice)),
        }
    }
}
