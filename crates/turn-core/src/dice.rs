//! Dice sources for combat rolls.
//!
//! The calculator never reaches for a global random generator. Callers pick a
//! [`DiceRoller`] and hand it over, which keeps tests deterministic and lets
//! a seeded run be replayed.
//!
//! # Implementations
//!
//! - [`ThreadDice`]: thread-local generator, the default for live requests
//! - [`SeededDice`]: reproducible sequence from a `u64` seed
//! - [`FixedDice`]: replays a given list of rolls (tests, `--roll` overrides)

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lowest possible roll.
pub const DIE_MIN: u32 = 1;

/// Highest possible roll (inclusive). Rolls are drawn from `[1, 20)`.
pub const DIE_MAX: u32 = 19;

/// Source of combat rolls.
///
/// Implementations must always return a value in `[DIE_MIN, DIE_MAX]` and
/// must be safe to share between concurrently running requests.
pub trait DiceRoller: Send + Sync {
    /// Draw one roll.
    fn roll(&self) -> u32;
}

impl<D: DiceRoller + ?Sized> DiceRoller for &D {
    fn roll(&self) -> u32 {
        (**self).roll()
    }
}

impl<D: DiceRoller + ?Sized> DiceRoller for Box<D> {
    fn roll(&self) -> u32 {
        (**self).roll()
    }
}

impl<D: DiceRoller + ?Sized> DiceRoller for Arc<D> {
    fn roll(&self) -> u32 {
        (**self).roll()
    }
}

/// Returns true if `roll` is a value a die can produce.
pub const fn is_valid_roll(roll: u32) -> bool {
    roll >= DIE_MIN && roll <= DIE_MAX
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// The cursor is atomic, so a shared `FixedDice` hands out the sequence in
/// call order across threads.
#[derive(Debug)]
pub struct FixedDice {
    rolls: Vec<u32>,
    cursor: AtomicUsize,
}

impl FixedDice {
    /// Create a replay of `rolls`.
    ///
    /// Returns `None` if the sequence is empty or contains a value outside
    /// `[DIE_MIN, DIE_MAX]`.
    pub fn new(rolls: Vec<u32>) -> Option<Self> {
        if rolls.is_empty() || !rolls.iter().all(|&roll| is_valid_roll(roll)) {
            return None;
        }
        Some(Self {
            rolls,
            cursor: AtomicUsize::new(0),
        })
    }

    /// A die that always shows `roll`.
    pub fn constant(roll: u32) -> Option<Self> {
        Self::new(vec![roll])
    }
}

impl Clone for FixedDice {
    fn clone(&self) -> Self {
        Self {
            rolls: self.rolls.clone(),
            cursor: AtomicUsize::new(self.cursor.load(Ordering::SeqCst)),
        }
    }
}

impl DiceRoller for FixedDice {
    fn roll(&self) -> u32 {
        let idx = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.rolls[idx % self.rolls.len()]
    }
}

#[cfg(feature = "rand")]
pub use self::random::{SeededDice, ThreadDice};

#[cfg(feature = "rand")]
mod random {
    use std::sync::{Mutex, PoisonError};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{DIE_MAX, DIE_MIN, DiceRoller};

    /// Thread-local generator. Stateless from the caller's point of view.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ThreadDice;

    impl DiceRoller for ThreadDice {
        fn roll(&self) -> u32 {
            rand::thread_rng().gen_range(DIE_MIN..=DIE_MAX)
        }
    }

    /// Reproducible dice: the same seed yields the same roll sequence.
    ///
    /// Draws are serialized through a mutex; concurrent callers each get the
    /// next value, in lock order.
    #[derive(Debug)]
    pub struct SeededDice {
        rng: Mutex<StdRng>,
    }

    impl SeededDice {
        pub fn from_seed(seed: u64) -> Self {
            Self {
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
            }
        }
    }

    impl DiceRoller for SeededDice {
        fn roll(&self) -> u32 {
            // A poisoned lock still holds a usable generator.
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(DIE_MIN..=DIE_MAX)
        }
    }
}
