use crate::models::{BodyPart, PitchPoint, ShotOutcome};

/// Fixed attacking goal reference in pitch coordinates
pub const GOAL_POINT: PitchPoint = PitchPoint { x: 100.0, y: 50.0 };

// xG model
const XG_DISTANCE_SCALE: f64 = 100.0;
const HEADER_FACTOR: f64 = 0.7;
const OTHER_BODY_PART_FACTOR: f64 = 0.5;
/// Goals are never reported below this xG
pub const GOAL_XG_FLOOR: f64 = 0.3;
pub const XG_MAX: f64 = 1.0;

// xA model
const XA_DISTANCE_SCALE: f64 = 80.0;
pub const XA_MAX: f64 = 0.8;

/// Expected goals for a shot.
///
/// Linear decay with distance to [`GOAL_POINT`] (zero at 100 units), scaled
/// down for headers (0.7x) and other body parts (0.5x). A scored shot is
/// floored at 0.3. Off-grid points are clamped first. Always in `[0, 1]`.
pub fn expected_goals(point: PitchPoint, outcome: ShotOutcome, body_part: BodyPart) -> f64 {
    let distance = point.clamped().distance_to(&GOAL_POINT);
    let mut base = (1.0 - distance / XG_DISTANCE_SCALE).max(0.0);

    base *= match body_part {
        BodyPart::Foot => 1.0,
        BodyPart::Head => HEADER_FACTOR,
        BodyPart::Other => OTHER_BODY_PART_FACTOR,
    };

    if outcome == ShotOutcome::Goal {
        base = base.max(GOAL_XG_FLOOR);
    }

    base.clamp(0.0, XG_MAX)
}

/// Expected assists for a pass ending at `end`.
///
/// Linear decay with the end point's distance to [`GOAL_POINT`] (zero at 80
/// units), capped at 0.8. Incomplete passes are worth nothing. Off-grid end
/// points are clamped first.
pub fn expected_assists(end: PitchPoint, completed: bool) -> f64 {
    if !completed {
        return 0.0;
    }
    let distance = end.clamped().distance_to(&GOAL_POINT);
    let base = (1.0 - distance / XA_DISTANCE_SCALE).max(0.0);
    base.clamp(0.0, XA_MAX)
}
