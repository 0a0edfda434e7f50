//! Tool-call dispatch for the turn manager.
//!
//! The chat layer hands over a function name and a JSON argument string; the
//! plugin answers with the outcome as a JSON string ready to be appended to
//! the conversation as the tool result.

use serde::Deserialize;
use serde_json::Value;
use turn_core::{DiceRoller, Outcome, OutcomeCalculator, Scenario};

use crate::error::ToolError;
use crate::tool::ToolDefinition;

#[derive(Debug, Deserialize)]
struct CalculateOutcomeArgs {
    scenario: Scenario,
}

/// Exposes `calculateOutcome` to the model.
pub struct TurnManagerPlugin<D> {
    calculator: OutcomeCalculator<D>,
    definition: ToolDefinition,
}

impl<D: DiceRoller> TurnManagerPlugin<D> {
    pub fn new(dice: D) -> Self {
        Self {
            calculator: OutcomeCalculator::new(dice),
            definition: ToolDefinition::calculate_outcome(),
        }
    }

    /// Functions this plugin can serve.
    pub fn definitions(&self) -> &[ToolDefinition] {
        std::slice::from_ref(&self.definition)
    }

    /// Resolve one scenario.
    pub fn calculate_outcome(&self, scenario: &Scenario) -> Outcome {
        tracing::info!(
            firing.pose = %scenario.firing.pose,
            firing.weapon = %scenario.firing.weapon,
            target.pose = %scenario.target.pose,
            target.weapon = %scenario.target.weapon,
            distance.value = scenario.distance.value,
            distance.unit = %scenario.distance.unit,
            distance.estimated = scenario.distance.estimated,
            "Calculating outcome of the wargame scenario"
        );

        let outcome = self.calculator.calculate(scenario);

        tracing::debug!(
            firing_modifier = outcome.firing_modifier,
            target_modifier = outcome.target_modifier,
            distance_modifier = outcome.distance_modifier,
            rolled_dice = outcome.rolled_dice,
            hit = outcome.hit_or_miss,
            "Outcome calculated"
        );

        outcome
    }

    /// Dispatch a tool call given as a JSON value.
    ///
    /// `arguments` must be an object with a `scenario` field. Unknown extra
    /// fields are ignored.
    pub fn invoke_value(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        if !self.definition.matches(name) {
            tracing::warn!(function = name, "Model called an unknown function");
            return Err(ToolError::UnknownFunction(name.to_string()));
        }

        let args: CalculateOutcomeArgs =
            serde_json::from_value(arguments).map_err(ToolError::InvalidArguments)?;
        let outcome = self.calculate_outcome(&args.scenario);

        serde_json::to_value(outcome).map_err(ToolError::Serialization)
    }

    /// Dispatch a tool call given as raw JSON text, as it arrives from the
    /// chat endpoint.
    pub fn invoke(&self, name: &str, arguments: &str) -> Result<String, ToolError> {
        let arguments: Value =
            serde_json::from_str(arguments).map_err(ToolError::InvalidArguments)?;
        let result = self.invoke_value(name, arguments)?;
        serde_json::to_string(&result).map_err(ToolError::Serialization)
    }
}
