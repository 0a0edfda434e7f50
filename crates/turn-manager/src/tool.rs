//! Tool descriptor advertised to the chat model.
//!
//! The model only ever sees this description: a function name, a sentence of
//! prose, and a JSON Schema for the arguments. Enum values are listed exactly
//! as they appear on the wire.

use serde::Serialize;
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use turn_core::{Pose, Weapon};

/// Plugin that groups the turn-manager functions.
pub const PLUGIN_NAME: &str = "TurnManagerPlugin";

/// Function computing the outcome of a scenario.
pub const CALCULATE_OUTCOME: &str = "calculateOutcome";

/// A callable function exposed to the model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub plugin: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema of the argument object.
    pub parameters: Value,
    pub returns: &'static str,
}

impl ToolDefinition {
    /// Descriptor of `calculateOutcome`.
    pub fn calculate_outcome() -> Self {
        Self {
            plugin: PLUGIN_NAME,
            name: CALCULATE_OUTCOME,
            description: "Calculate the outcome of the wargame scenario, evaluating modifiers \
                          for the firing and target toy soldiers.",
            parameters: json!({
                "type": "object",
                "properties": {
                    "scenario": scenario_schema(),
                },
                "required": ["scenario"],
            }),
            returns: "The outcome of the wargame scenario.",
        }
    }

    /// Function name as registered with the chat endpoint: `Plugin-function`.
    pub fn qualified_name(&self) -> String {
        format!("{}-{}", self.plugin, self.name)
    }

    /// Returns true if `name` refers to this function, bare or qualified.
    pub fn matches(&self, name: &str) -> bool {
        name == self.name
            || name
                .strip_prefix(self.plugin)
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|rest| rest == self.name)
    }

    /// OpenAI-style `tools` entry.
    pub fn to_openai_tool(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.qualified_name(),
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

fn scenario_schema() -> Value {
    json!({
        "type": "object",
        "description": "The wargame scenario",
        "properties": {
            "firing": combatant_schema("The characteristics of the firing toy soldier."),
            "target": combatant_schema("The characteristics of the target toy soldier."),
            "distance": {
                "type": "object",
                "description": "The distance between the firing and target toy soldiers.",
                "properties": {
                    "value": { "type": "integer", "minimum": 0 },
                    "unit": { "type": "string" },
                    "estimated": { "type": "boolean" },
                },
                "required": ["value", "unit", "estimated"],
            },
        },
        "required": ["firing", "target", "distance"],
    })
}

fn combatant_schema(description: &str) -> Value {
    let poses: Vec<_> = Pose::iter()
        .filter(|pose| *pose != Pose::Unrecognized)
        .map(|pose| pose.as_str())
        .collect();
    let weapons: Vec<_> = Weapon::iter()
        .filter(|weapon| *weapon != Weapon::Unrecognized)
        .map(|weapon| weapon.as_str())
        .collect();

    json!({
        "type": "object",
        "description": description,
        "properties": {
            "pose": { "type": "string", "enum": poses },
            "weapon": { "type": "string", "enum": weapons },
            "coordinates": {
                "type": "object",
                "description": "Position in the image, relative to the upper-left corner.",
                "properties": {
                    "x": { "type": "integer" },
                    "y": { "type": "integer" },
                },
                "required": ["x", "y"],
            },
        },
        "required": ["pose", "weapon"],
    })
}
