//! Scenario model: who fires, who is targeted, and how far apart they stand.
//!
//! These are transient value objects. A scenario is built once per request
//! (usually deserialized from the model's tool-call arguments) and never
//! mutated afterwards.

use strum::{Display, EnumIter, IntoStaticStr};

/// Body position of a toy soldier.
///
/// Wire names are lowercase. Any other string deserializes to
/// [`Pose::Unrecognized`], which contributes no modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pose {
    #[strum(serialize = "standing")]
    #[cfg_attr(feature = "serde", serde(rename = "standing"))]
    Standing,

    #[strum(serialize = "crouched")]
    #[cfg_attr(feature = "serde", serde(rename = "crouched"))]
    Crouched,

    #[strum(serialize = "prone")]
    #[cfg_attr(feature = "serde", serde(rename = "prone"))]
    Prone,

    /// Catch-all for values outside the known set.
    #[strum(serialize = "unrecognized")]
    #[cfg_attr(feature = "serde", serde(rename = "unrecognized", other))]
    Unrecognized,
}

impl Pose {
    /// Returns the wire name of this pose.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Weapon carried by a toy soldier.
///
/// Wire names are kept verbatim: `machine_gun` keeps its underscore and
/// `SMG` stays uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weapon {
    #[strum(serialize = "pistol")]
    #[cfg_attr(feature = "serde", serde(rename = "pistol"))]
    Pistol,

    #[strum(serialize = "machine_gun")]
    #[cfg_attr(feature = "serde", serde(rename = "machine_gun"))]
    MachineGun,

    #[strum(serialize = "SMG")]
    #[cfg_attr(feature = "serde", serde(rename = "SMG"))]
    Smg,

    #[strum(serialize = "rifle")]
    #[cfg_attr(feature = "serde", serde(rename = "rifle"))]
    Rifle,

    /// Catch-all for values outside the known set.
    #[strum(serialize = "unrecognized")]
    #[cfg_attr(feature = "serde", serde(rename = "unrecognized", other))]
    Unrecognized,
}

impl Weapon {
    /// Returns the wire name of this weapon.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Position of a soldier in the source image, relative to the upper-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single soldier: pose, weapon, and where it was spotted in the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub pose: Pose,
    pub weapon: Weapon,

    /// Image position; informational only, never affects a modifier.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub coordinates: Option<Coordinates>,
}

impl Combatant {
    pub const fn new(pose: Pose, weapon: Weapon) -> Self {
        Self {
            pose,
            weapon,
            coordinates: None,
        }
    }

    /// Attaches image coordinates (builder pattern).
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

/// Distance between the two soldiers.
///
/// `unit` is carried as reported (typically `cm`). No conversion is applied
/// anywhere: the distance modifier compares `value` directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    pub value: u32,
    pub unit: String,
    pub estimated: bool,
}

impl Distance {
    /// A measured distance.
    pub fn new(value: u32, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            estimated: false,
        }
    }

    /// A distance the model estimated from the picture.
    pub fn estimated(value: u32, unit: impl Into<String>) -> Self {
        Self {
            estimated: true,
            ..Self::new(value, unit)
        }
    }
}

/// Input of a single combat exchange.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// The soldier taking the shot.
    pub firing: Combatant,
    /// The soldier being shot at.
    pub target: Combatant,
    pub distance: Distance,
}

impl Scenario {
    pub const fn new(firing: Combatant, target: Combatant, distance: Distance) -> Self {
        Self {
            firing,
            target,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_names_are_verbatim() {
        let names: Vec<_> = Weapon::iter().map(|w| w.as_str()).collect();
        assert_eq!(
            names,
            ["pistol", "machine_gun", "SMG", "rifle", "unrecognized"]
        );

        let names: Vec<_> = Pose::iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["standing", "crouched", "prone", "unrecognized"]);
    }

    #[test]
    fn estimated_distance_keeps_value_and_unit() {
        let distance = Distance::estimated(42, "cm");
        assert_eq!(distance.value, 42);
        assert_eq!(distance.unit, "cm");
        assert!(distance.estimated);
        assert!(!Distance::new(42, "cm").estimated);
    }

    #[cfg(feature = "serde")]
    mod wire {
        use super::*;
        use serde_json::json;

        #[test]
        fn scenario_deserializes_from_tool_arguments() {
            let scenario: Scenario = serde_json::from_value(json!({
                "firing": { "pose": "standing", "weapon": "SMG" },
                "target": { "pose": "prone", "weapon": "machine_gun",
                            "coordinates": { "x": 120, "y": 48 } },
                "distance": { "value": 35, "unit": "cm", "estimated": true }
            }))
            .unwrap();

            assert_eq!(scenario.firing, Combatant::new(Pose::Standing, Weapon::Smg));
            assert_eq!(
                scenario.target,
                Combatant::new(Pose::Prone, Weapon::MachineGun)
                    .with_coordinates(Coordinates::new(120, 48))
            );
            assert_eq!(scenario.distance, Distance::estimated(35, "cm"));
        }

        #[test]
        fn unknown_enum_values_fall_back_to_unrecognized() {
            let combatant: Combatant =
                serde_json::from_value(json!({ "pose": "kneeling", "weapon": "bazooka" }))
                    .unwrap();

            assert_eq!(combatant.pose, Pose::Unrecognized);
            assert_eq!(combatant.weapon, Weapon::Unrecognized);
        }

        #[test]
        fn casing_is_not_normalized() {
            // `smg` is not `SMG`
            let weapon: Weapon = serde_json::from_value(json!("smg")).unwrap();
            assert_eq!(weapon, Weapon::Unrecognized);
        }

        #[test]
        fn absent_coordinates_are_omitted() {
            let value = serde_json::to_value(Combatant::new(Pose::Crouched, Weapon::Rifle)).unwrap();
            assert_eq!(value, json!({ "pose": "crouched", "weapon": "rifle" }));
        }

        #[test]
        fn negative_distance_is_rejected() {
            let result = serde_json::from_value::<Distance>(json!({
                "value": -5, "unit": "cm", "estimated": false
            }));
            assert!(result.is_err());
        }
    }
}
