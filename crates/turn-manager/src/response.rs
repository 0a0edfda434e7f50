//! Validation of the model's final reply.
//!
//! The model is asked to answer with a single JSON object holding the
//! scenario it identified and the outcome the tool returned. A reply that
//! does not have exactly that shape is rejected with a specific
//! [`ResponseError`]; there is no free-text fallback.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use turn_core::dice::is_valid_roll;
use turn_core::{DiceRoller, Modifiers, Outcome, OutcomeCalculator, Scenario};

use crate::error::ResponseError;

/// Scenario and outcome together: what the service returns to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub scenario: Scenario,
    pub outcome: Outcome,
}

impl CombatResult {
    /// Resolve `scenario` locally, for replies that carry only the scenario.
    pub fn resolve<D: DiceRoller>(scenario: Scenario, calculator: &OutcomeCalculator<D>) -> Self {
        let outcome = calculator.calculate(&scenario);
        Self { scenario, outcome }
    }

    /// Check that the outcome follows from the scenario under the combat
    /// rules. Catches replies where the model rewrote the tool result.
    pub fn verify(&self) -> Result<(), ResponseError> {
        let outcome = &self.outcome;
        let inconsistent = |reason| ResponseError::InconsistentOutcome {
            reported: *outcome,
            reason,
        };

        if !is_valid_roll(outcome.rolled_dice) {
            return Err(inconsistent("rolled-dice is outside 1..=19"));
        }
        if outcome.modifiers() != Modifiers::for_scenario(&self.scenario) {
            return Err(inconsistent("modifiers do not match the scenario"));
        }
        if outcome.hit_or_miss != (outcome.rolled_dice > outcome.total_modifier()) {
            return Err(inconsistent("hit-or-miss does not follow from the roll"));
        }
        Ok(())
    }
}

/// Parse a `{ "scenario": ..., "outcome": ... }` reply.
///
/// The outcome is checked first, since it is the part the client needs.
/// A `null` field counts as missing.
pub fn parse_combat_result(content: &str) -> Result<CombatResult, ResponseError> {
    let root = parse_object(content)?;

    let outcome = field(&root, "outcome").ok_or(ResponseError::MissingOutcome)?;
    let outcome = Outcome::deserialize(outcome).map_err(ResponseError::MalformedOutcome)?;

    let scenario = field(&root, "scenario").ok_or(ResponseError::MissingScenario)?;
    let scenario = Scenario::deserialize(scenario).map_err(ResponseError::MalformedScenario)?;

    Ok(CombatResult { scenario, outcome })
}

/// Parse a reply whose root object is the scenario itself.
pub fn parse_scenario(content: &str) -> Result<Scenario, ResponseError> {
    let root = parse_object(content)?;
    Scenario::deserialize(Value::Object(root)).map_err(ResponseError::MalformedScenario)
}

fn parse_object(content: &str) -> Result<Map<String, Value>, ResponseError> {
    match serde_json::from_str(content).map_err(ResponseError::NotJson)? {
        Value::Object(map) => Ok(map),
        _ => Err(ResponseError::NotAnObject),
    }
}

fn field<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    root.get(key).filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TurnError;
    use serde_json::json;
    use turn_core::{Combatant, Distance, FixedDice, Pose, Weapon};

    fn reply(outcome: Value) -> String {
        json!({
            "scenario": {
                "firing": { "pose": "standing", "weapon": "pistol" },
                "target": { "pose": "crouched", "weapon": "rifle" },
                "distance": { "value": 50, "unit": "cm", "estimated": true }
            },
            "outcome": outcome
        })
        .to_string()
    }

    fn honest_outcome() -> Value {
        json!({
            "firing-modifier": 5,
            "target-modifier": 3,
            "distance-modifier": 0,
            "rolled-dice": 10,
            "hit-or-miss": true
        })
    }

    #[test]
    fn well_formed_reply_parses_and_verifies() {
        let result = parse_combat_result(&reply(honest_outcome())).unwrap();
        assert_eq!(result.scenario.firing.weapon, Weapon::Pistol);
        assert_eq!(result.outcome.rolled_dice, 10);
        assert!(result.outcome.hit_or_miss);
        result.verify().unwrap();
    }

    #[test]
    fn rejects_each_malformed_shape() {
        let cases = [
            ("the soldier missed", "RESPONSE_NOT_JSON"),
            ("[1, 2, 3]", "RESPONSE_NOT_AN_OBJECT"),
            (r#"{"scenario": {}}"#, "RESPONSE_MISSING_OUTCOME"),
            (r#"{"outcome": null}"#, "RESPONSE_MISSING_OUTCOME"),
        ];
        for (content, code) in cases {
            let err = parse_combat_result(content).unwrap_err();
            assert_eq!(err.error_code(), code, "content: {content}");
        }

        let err = parse_combat_result(&reply(json!({ "hit": true }))).unwrap_err();
        assert!(matches!(err, ResponseError::MalformedOutcome(_)));

        let err = parse_combat_result(&json!({ "outcome": honest_outcome() }).to_string())
            .unwrap_err();
        assert!(matches!(err, ResponseError::MissingScenario));

        let err = parse_combat_result(
            &json!({ "scenario": { "firing": {} }, "outcome": honest_outcome() }).to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, ResponseError::MalformedScenario(_)));
    }

    #[test]
    fn verify_catches_tampered_outcomes() {
        let mut flipped = honest_outcome();
        flipped["hit-or-miss"] = json!(false);
        let err = parse_combat_result(&reply(flipped)).unwrap().verify().unwrap_err();
        assert!(matches!(
            err,
            ResponseError::InconsistentOutcome { reason, .. } if reason.contains("hit-or-miss")
        ));

        let mut wrong_modifier = honest_outcome();
        wrong_modifier["firing-modifier"] = json!(1);
        let err = parse_combat_result(&reply(wrong_modifier)).unwrap().verify().unwrap_err();
        assert!(matches!(
            err,
            ResponseError::InconsistentOutcome { reason, .. } if reason.contains("modifiers")
        ));

        let mut loaded_die = honest_outcome();
        loaded_die["rolled-dice"] = json!(20);
        let err = parse_combat_result(&reply(loaded_die)).unwrap().verify().unwrap_err();
        assert_eq!(err.error_code(), "RESPONSE_INCONSISTENT_OUTCOME");
    }

    #[test]
    fn scenario_only_reply_is_resolved_locally() {
        let content = json!({
            "firing": { "pose": "prone", "weapon": "rifle" },
            "target": { "pose": "prone", "weapon": "SMG" },
            "distance": { "value": 80, "unit": "cm", "estimated": false }
        })
        .to_string();

        let scenario = parse_scenario(&content).unwrap();
        assert_eq!(scenario.target, Combatant::new(Pose::Prone, Weapon::Smg));
        assert_eq!(scenario.distance, Distance::new(80, "cm"));

        let calculator = OutcomeCalculator::new(FixedDice::constant(15).unwrap());
        let result = CombatResult::resolve(scenario, &calculator);
        assert_eq!(result.outcome.total_modifier(), 10);
        assert!(result.outcome.hit_or_miss);
        result.verify().unwrap();
    }

    #[test]
    fn serialized_result_nests_hyphenated_outcome() {
        let result = parse_combat_result(&reply(honest_outcome())).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["outcome"], honest_outcome());
        assert_eq!(value["scenario"]["distance"]["estimated"], true);
    }
}
