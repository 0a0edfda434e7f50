//! Combat rules for the toy-soldier wargame.
//!
//! `turn-core` defines the canonical scenario model (two combatants and the
//! distance between them) and the pure resolution step that turns a scenario
//! into an [`Outcome`]. The only source of non-determinism is the injected
//! [`DiceRoller`], so every other part of an outcome can be reproduced from
//! its scenario alone.
//!
//! # Architecture
//!
//! - **Pure Functions**: modifier lookups and [`resolve`] have no side effects
//! - **Injected Dice**: [`OutcomeCalculator`] owns whichever [`DiceRoller`] the
//!   caller hands it (seeded, thread-local, or a fixed replay for tests)
//! - **No I/O**: logging and JSON dispatch live in the `turn-manager` crate
pub mod calculator;
pub mod dice;
pub mod modifiers;
pub mod outcome;
pub mod scenario;

pub use calculator::{OutcomeCalculator, resolve};
#[cfg(feature = "rand")]
pub use dice::{SeededDice, ThreadDice};
pub use dice::{DIE_MAX, DIE_MIN, DiceRoller, FixedDice};
pub use modifiers::{
    DISTANCE_PENALTY, DISTANCE_THRESHOLD, Modifiers, distance_modifier, firing_modifier,
    target_modifier,
};
pub use outcome::Outcome;
pub use scenario::{Combatant, Coordinates, Distance, Pose, Scenario, Weapon};
