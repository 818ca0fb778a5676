use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    clamp_coord, ActionType, AssistType, BodyPart, EventType, Phase, PitchPoint, ShotOutcome, Zone,
};
use crate::engine::metric_engine::{expected_assists, expected_goals, XA_MAX, XG_MAX};

/// Event enumeration - all recordable event types
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Shot(ShotEvent),
    Pass(PassEvent),
    Defensive(DefensiveEvent),
}

/// Shot event with location, attributes and xG
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
    pub outcome: ShotOutcome,
    pub body_part: BodyPart,
    pub assist_type: AssistType,
    #[serde(rename = "xG")]
    pub xg: f64, // 0.0-1.0
    pub phase: Phase,
    pub zone: Zone,
}

/// Pass event from start click to end click
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassEvent {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub completed: bool,
    #[serde(rename = "xA")]
    pub xa: f64, // 0.0-0.8
    pub phase: Phase,
    pub zone: Zone,
}

/// Tackle, interception, block or clearance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefensiveEvent {
    pub x: f64,
    pub y: f64,
    pub action_type: ActionType,
    pub success: bool,
    pub phase: Phase,
    pub zone: Zone,
}

impl ShotEvent {
    pub fn point(&self) -> PitchPoint {
        PitchPoint { x: self.x, y: self.y }
    }
}

impl PassEvent {
    pub fn start(&self) -> PitchPoint {
        PitchPoint { x: self.start_x, y: self.start_y }
    }

    pub fn end(&self) -> PitchPoint {
        PitchPoint { x: self.end_x, y: self.end_y }
    }

    /// Start and end on the same spot
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }
}

impl DefensiveEvent {
    pub fn point(&self) -> PitchPoint {
        PitchPoint { x: self.x, y: self.y }
    }
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::Shot(_) => EventType::Shot,
            Event::Pass(_) => EventType::Pass,
            Event::Defensive(_) => EventType::Defensive,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Event::Shot(e) => e.phase,
            Event::Pass(e) => e.phase,
            Event::Defensive(e) => e.phase,
        }
    }

    pub fn zone(&self) -> Zone {
        match self {
            Event::Shot(e) => e.zone,
            Event::Pass(e) => e.zone,
            Event::Defensive(e) => e.zone,
        }
    }

    /// Where the marker for this event is drawn (pass: start point)
    pub fn anchor(&self) -> PitchPoint {
        match self {
            Event::Shot(e) => e.point(),
            Event::Pass(e) => e.start(),
            Event::Defensive(e) => e.point(),
        }
    }

    /// Re-derive xG / xA from the event's own fields.
    pub fn recompute_metrics(&mut self) {
        match self {
            Event::Shot(e) => e.xg = expected_goals(e.point(), e.outcome, e.body_part),
            Event::Pass(e) => e.xa = expected_assists(e.end(), e.completed),
            Event::Defensive(_) => {}
        }
    }

    /// Clamp every coordinate into the pitch grid and recompute metrics.
    ///
    /// Used for events that did not come through the coordinate mapper
    /// (explicit edits, seeded lists, JSON input).
    pub fn normalized(mut self) -> Self {
        match &mut self {
            Event::Shot(e) => {
                e.x = clamp_coord(e.x);
                e.y = clamp_coord(e.y);
            }
            Event::Pass(e) => {
                e.start_x = clamp_coord(e.start_x);
                e.start_y = clamp_coord(e.start_y);
                e.end_x = clamp_coord(e.end_x);
                e.end_y = clamp_coord(e.end_y);
            }
            Event::Defensive(e) => {
                e.x = clamp_coord(e.x);
                e.y = clamp_coord(e.y);
            }
        }
        self.recompute_metrics();
        self
    }

    /// Coordinates on the grid and metrics within their bounds
    pub fn is_valid(&self) -> bool {
        match self {
            Event::Shot(e) => e.point().is_valid() && (0.0..=XG_MAX).contains(&e.xg),
            Event::Pass(e) => {
                e.start().is_valid() && e.end().is_valid() && (0.0..=XA_MAX).contains(&e.xa)
            }
            Event::Defensive(e) => e.point().is_valid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pass() -> PassEvent {
        PassEvent {
            start_x: 40.0,
            start_y: 30.0,
            end_x: 100.0,
            end_y: 50.0,
            completed: true,
            xa: 0.0,
            phase: Phase::InPossession,
            zone: Zone::Progression,
        }
    }

    #[test]
    fn test_tagged_wire_shape() {
        let json = serde_json::to_value(Event::Pass(sample_pass())).unwrap();
        assert_eq!(json["type"], "pass");
        assert_eq!(json["startX"], 40.0);
        assert_eq!(json["endY"], 50.0);
        assert_eq!(json["xA"], 0.0);
        assert_eq!(json["zone"], "progression");
    }

    #[test]
    fn test_shot_deserializes_from_wire() {
        let json = r#"{
            "type": "shot", "x": 90.0, "y": 50.0, "outcome": "goal", "bodyPart": "foot",
            "assistType": "cross", "xG": 0.9, "phase": "attacking_transition", "zone": "finishing"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        let Event::Shot(shot) = &event else { panic!("expected shot, got {event:?}") };
        assert_eq!(shot.assist_type, AssistType::Cross);
        assert_eq!(event.event_type(), EventType::Shot);
        assert_eq!(event.phase(), Phase::AttackingTransition);
    }

    #[test]
    fn test_normalized_clamps_and_recomputes() {
        let mut pass = sample_pass();
        pass.end_x = 180.0;
        pass.start_y = -20.0;
        pass.xa = 0.99;

        let event = Event::Pass(pass).normalized();
        let Event::Pass(p) = &event else { unreachable!() };
        assert_eq!(p.end_x, 100.0);
        assert_eq!(p.start_y, 0.0);
        assert!((p.xa - 0.8).abs() < 1e-9);
        assert!(event.is_valid());
    }

    #[test]
    fn test_anchor_for_pass_is_start() {
        let event = Event::Pass(sample_pass());
        assert_eq!(event.anchor(), PitchPoint::new(40.0, 30.0));
    }

    #[test]
    fn test_degenerate_pass_is_still_valid() {
        let mut pass = sample_pass();
        pass.end_x = pass.start_x;
        pass.end_y = pass.start_y;
        assert!(pass.is_degenerate());
        assert!(Event::Pass(pass).normalized().is_valid());
    }

    #[test]
    fn test_out_of_range_metric_is_invalid() {
        let event = Event::Shot(ShotEvent {
            x: 50.0,
            y: 50.0,
            outcome: ShotOutcome::Miss,
            body_part: BodyPart::Foot,
            assist_type: AssistType::OpenPlay,
            xg: 1.4,
            phase: Phase::InPossession,
            zone: Zone::Finishing,
        });
        assert!(!event.is_valid());
        assert!(event.normalized().is_valid());
    }
}
