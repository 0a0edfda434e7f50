//! Modifier tables.
//!
//! Each modifier is derived from exactly one scenario attribute. The sum of
//! the three is the number the dice roll has to beat.

use crate::scenario::{Pose, Scenario, Weapon};

/// Distances at or above this value add [`DISTANCE_PENALTY`].
pub const DISTANCE_THRESHOLD: u32 = 70;

/// Modifier applied to long-range shots.
pub const DISTANCE_PENALTY: u32 = 3;

/// Modifier contributed by the firing soldier's weapon.
///
/// | weapon        | modifier |
/// |---------------|----------|
/// | rifle         | 1        |
/// | machine_gun   | 2        |
/// | SMG           | 3        |
/// | pistol        | 5        |
/// | unrecognized  | 0        |
pub const fn firing_modifier(weapon: Weapon) -> u32 {
    match weapon {
        Weapon::Rifle => 1,
        Weapon::MachineGun => 2,
        Weapon::Smg => 3,
        Weapon::Pistol => 5,
        Weapon::Unrecognized => 0,
    }
}

/// Modifier contributed by the target soldier's pose.
///
/// | pose          | modifier |
/// |---------------|----------|
/// | crouched      | 3        |
/// | prone         | 6        |
/// | standing      | 0        |
/// | unrecognized  | 0        |
pub const fn target_modifier(pose: Pose) -> u32 {
    match pose {
        Pose::Crouched => 3,
        Pose::Prone => 6,
        Pose::Standing | Pose::Unrecognized => 0,
    }
}

/// Modifier contributed by the distance value.
///
/// The unit is ignored: `70` means 70 of whatever unit was reported.
pub const fn distance_modifier(distance: u32) -> u32 {
    if distance >= DISTANCE_THRESHOLD {
        DISTANCE_PENALTY
    } else {
        0
    }
}

/// The three modifiers of a scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub firing: u32,
    pub target: u32,
    pub distance: u32,
}

impl Modifiers {
    pub fn for_scenario(scenario: &Scenario) -> Self {
        Self {
            firing: firing_modifier(scenario.firing.weapon),
            target: target_modifier(scenario.target.pose),
            distance: distance_modifier(scenario.distance.value),
        }
    }

    /// Sum of all modifiers, saturating at `u32::MAX`.
    ///
    /// Table values never come close; the bound only matters for modifiers
    /// read back from an unverified reply.
    pub const fn total(&self) -> u32 {
        self.firing
            .saturating_add(self.target)
            .saturating_add(self.distance)
    }
}
