//! Outcome of a resolved scenario.

use crate::modifiers::Modifiers;

/// Result of a combat resolution.
///
/// Serialized with the hyphenated keys the chat layer expects:
/// `firing-modifier`, `target-modifier`, `distance-modifier`, `rolled-dice`,
/// `hit-or-miss`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Modifier of the firing toy soldier (from its weapon).
    #[cfg_attr(feature = "serde", serde(rename = "firing-modifier"))]
    pub firing_modifier: u32,

    /// Modifier of the target toy soldier (from its pose).
    #[cfg_attr(feature = "serde", serde(rename = "target-modifier"))]
    pub target_modifier: u32,

    /// Modifier of the distance between the two soldiers.
    #[cfg_attr(feature = "serde", serde(rename = "distance-modifier"))]
    pub distance_modifier: u32,

    /// The virtual die, compared against the sum of the modifiers.
    #[cfg_attr(feature = "serde", serde(rename = "rolled-dice"))]
    pub rolled_dice: u32,

    /// `true` if the firing soldier hit the target.
    #[cfg_attr(feature = "serde", serde(rename = "hit-or-miss"))]
    pub hit_or_miss: bool,
}

impl Outcome {
    /// Build an outcome from modifiers and a roll.
    ///
    /// The shot hits when the roll is strictly greater than the modifier
    /// total.
    pub const fn new(modifiers: Modifiers, rolled_dice: u32) -> Self {
        Self {
            firing_modifier: modifiers.firing,
            target_modifier: modifiers.target,
            distance_modifier: modifiers.distance,
            rolled_dice,
            hit_or_miss: rolled_dice > modifiers.total(),
        }
    }

    pub const fn modifiers(&self) -> Modifiers {
        Modifiers {
            firing: self.firing_modifier,
            target: self.target_modifier,
            distance: self.distance_modifier,
        }
    }

    pub const fn total_modifier(&self) -> u32 {
        self.modifiers().total()
    }

    pub const fn is_hit(&self) -> bool {
        self.hit_or_miss
    }
}
