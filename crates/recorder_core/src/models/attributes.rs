//! Attribute configuration selected in the recorder UI
//!
//! Every option is drawn from the enumerations in [`super::types`]. The
//! surrounding application owns the selector widgets; the engine only reads
//! the current values when an event is committed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{ActionType, AssistType, BodyPart, Phase, ShotOutcome, Zone};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AttributeConfig {
    /// Shot outcome
    pub outcome: ShotOutcome,
    /// Body part used for a shot
    pub body_part: BodyPart,
    /// How the shot was created
    pub assist_type: AssistType,
    /// Defensive action kind
    pub action_type: ActionType,
    /// Whether the defensive action succeeded
    pub success: bool,
    /// Whether a pass reached its target
    pub pass_completed: bool,
    pub phase: Phase,
    pub zone: Zone,
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            outcome: ShotOutcome::default(),
            body_part: BodyPart::default(),
            assist_type: AssistType::default(),
            action_type: ActionType::default(),
            success: true,
            pass_completed: true,
            phase: Phase::default(),
            zone: Zone::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let attrs: AttributeConfig =
            serde_json::from_str(r#"{"bodyPart": "head", "passCompleted": false}"#).unwrap();
        assert_eq!(attrs.body_part, BodyPart::Head);
        assert!(!attrs.pass_completed);
        assert_eq!(attrs.outcome, ShotOutcome::Goal);
        assert!(attrs.success);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(AttributeConfig::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in
            ["outcome", "bodyPart", "assistType", "actionType", "success", "passCompleted", "phase", "zone"]
        {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }
}
