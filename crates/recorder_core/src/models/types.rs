use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lower bound of the normalized pitch grid (percent)
pub const PITCH_MIN: f64 = 0.0;
/// Upper bound of the normalized pitch grid (percent)
pub const PITCH_MAX: f64 = 100.0;

/// Clamp a single coordinate into the pitch grid. NaN collapses to the lower bound.
#[inline]
pub fn clamp_coord(value: f64) -> f64 {
    if value.is_nan() {
        PITCH_MIN
    } else {
        value.clamp(PITCH_MIN, PITCH_MAX)
    }
}

/// Position on the normalized pitch.
/// Coordinates: 0-100 (x, goal line to goal line), 0-100 (y, touchline to touchline)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct PitchPoint {
    pub x: f64,
    pub y: f64,
}

impl PitchPoint {
    /// Build a point, clamping both axes into [0, 100].
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: clamp_coord(x), y: clamp_coord(y) }
    }

    pub fn is_valid(&self) -> bool {
        (PITCH_MIN..=PITCH_MAX).contains(&self.x) && (PITCH_MIN..=PITCH_MAX).contains(&self.y)
    }

    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Euclidean distance in pitch percent units
    pub fn distance_to(&self, other: &PitchPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Event-type tab selected in the recorder UI
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Shot,
    Pass,
    Defensive,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    #[default]
    Goal,
    Miss,
    Saved,
}

impl ShotOutcome {
    /// Goals and saves both reached the frame of the goal
    pub fn is_on_target(self) -> bool {
        matches!(self, ShotOutcome::Goal | ShotOutcome::Saved)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    #[default]
    Foot,
    Head,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum AssistType {
    #[default]
    OpenPlay,
    Corner,
    FreeKick,
    ThroughBall,
    Cross,
}

/// Defensive action kind
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    #[default]
    Tackle,
    Interception,
    Block,
    Clearance,
}

/// Possession phase tag attached at commit time
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, JsonSchema,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    InPossession,
    OutPossession,
    AttackingTransition,
    DefensiveTransition,
}

/// Pitch third tag attached at commit time
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, JsonSchema,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    #[default]
    BuildUp,
    Progression,
    Finishing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_point_new_clamps() {
        let p = PitchPoint::new(-5.0, 140.0);
        assert_eq!(p, PitchPoint { x: 0.0, y: 100.0 });
        assert!(p.is_valid());
    }

    #[test]
    fn test_clamp_coord_nan() {
        assert_eq!(clamp_coord(f64::NAN), 0.0);
        assert_eq!(clamp_coord(f64::INFINITY), 100.0);
        assert_eq!(clamp_coord(42.5), 42.5);
    }

    #[test]
    fn test_distance_to() {
        let a = PitchPoint::new(0.0, 0.0);
        let b = PitchPoint::new(30.0, 40.0);
        assert!((a.distance_to(&b) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_enum_wire_names() {
        let names: Vec<String> = Phase::iter()
            .map(|p| serde_json::to_value(p).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["in_possession", "out_possession", "attacking_transition", "defensive_transition"]
        );

        assert_eq!(serde_json::to_value(AssistType::FreeKick).unwrap(), "free_kick");
        assert_eq!(serde_json::to_value(AssistType::ThroughBall).unwrap(), "through_ball");
        assert_eq!(serde_json::to_value(Zone::BuildUp).unwrap(), "build_up");
        assert_eq!(serde_json::to_value(EventType::Defensive).unwrap(), "defensive");
    }

    #[test]
    fn test_on_target() {
        let on_target: Vec<ShotOutcome> = ShotOutcome::iter().filter(|o| o.is_on_target()).collect();
        assert_eq!(on_target, vec![ShotOutcome::Goal, ShotOutcome::Saved]);
    }
}
