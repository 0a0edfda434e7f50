//! Outcome calculation.

use crate::dice::DiceRoller;
use crate::modifiers::Modifiers;
use crate::outcome::Outcome;
use crate::scenario::Scenario;

/// Resolve a scenario against an already-drawn roll.
///
/// # Formula
///
/// ```text
/// total = firing_modifier(firing.weapon)
///       + target_modifier(target.pose)
///       + distance_modifier(distance.value)
/// hit   = rolled_dice > total
/// ```
///
/// Total over every scenario; there is no error path.
pub fn resolve(scenario: &Scenario, rolled_dice: u32) -> Outcome {
    Outcome::new(Modifiers::for_scenario(scenario), rolled_dice)
}

/// Resolves scenarios with dice drawn from an injected [`DiceRoller`].
///
/// Holds no state of its own, so a single calculator can serve concurrent
/// requests whenever its dice can.
#[derive(Clone, Debug, Default)]
pub struct OutcomeCalculator<D> {
    dice: D,
}

impl<D: DiceRoller> OutcomeCalculator<D> {
    pub const fn new(dice: D) -> Self {
        Self { dice }
    }

    /// Draw one roll and resolve `scenario` with it.
    pub fn calculate(&self, scenario: &Scenario) -> Outcome {
        resolve(scenario, self.dice.roll())
    }
}
