pub mod attributes;
pub mod events;
pub mod types;


pub use attributes::AttributeConfig;
pub use events::{DefensiveEvent, Event, PassEvent, ShotEvent};
pub use types::{
    clamp_coord, ActionType, AssistType, BodyPart, EventType, Phase, PitchPoint, ShotOutcome, Zone,
    PITCH_MAX, PITCH_MIN,
};
