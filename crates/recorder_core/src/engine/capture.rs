//! Event capture state machine
//!
//! Turns normalized clicks into events. Shots and defensive actions complete
//! on one click; a pass needs a start click and an end click.
//!
//! ```text
//! Idle --click [shot]------> commit ShotEvent       -> Idle
//! Idle --click [defensive]-> commit DefensiveEvent  -> Idle
//! Idle --click [pass]------> AwaitingPassEnd(start)
//! AwaitingPassEnd(start) --click--> commit PassEvent -> Idle
//! any --reset-------------> Idle (pending start discarded)
//! ```
//!
//! The machine only builds events. Committing them to history is the
//! session's job.

use super::metric_engine::{expected_assists, expected_goals};
use crate::models::{
    AttributeConfig, DefensiveEvent, Event, EventType, PassEvent, PitchPoint, ShotEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// First pass click received; the start marker is shown but not committed
    AwaitingPassEnd { start: PitchPoint },
}

/// Result of feeding one click to the machine
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Nothing happened (recording disabled or no surface)
    Ignored,
    /// Pass start marker placed; nothing committed yet
    PassStarted(PitchPoint),
    /// A complete event is ready to commit
    Committed(Event),
}

impl CaptureOutcome {
    pub fn event(&self) -> Option<&Event> {
        match self {
            CaptureOutcome::Committed(event) => Some(event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventCapture {
    state: CaptureState,
}

impl EventCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Start point of a pass waiting for its end click
    pub fn pending_pass_start(&self) -> Option<PitchPoint> {
        match self.state {
            CaptureState::AwaitingPassEnd { start } => Some(start),
            CaptureState::Idle => None,
        }
    }

    /// Feed one click. A pending pass is completed regardless of `event_type`.
    pub fn click(
        &mut self,
        point: PitchPoint,
        event_type: EventType,
        attrs: &AttributeConfig,
    ) -> CaptureOutcome {
        match (self.state, event_type) {
            (CaptureState::AwaitingPassEnd { start }, _) => {
                self.state = CaptureState::Idle;
                CaptureOutcome::Committed(Event::Pass(build_pass(start, point, attrs)))
            }
            (CaptureState::Idle, EventType::Pass) => {
                self.state = CaptureState::AwaitingPassEnd { start: point };
                CaptureOutcome::PassStarted(point)
            }
            (CaptureState::Idle, EventType::Shot) => {
                CaptureOutcome::Committed(Event::Shot(build_shot(point, attrs)))
            }
            (CaptureState::Idle, EventType::Defensive) => {
                CaptureOutcome::Committed(Event::Defensive(build_defensive(point, attrs)))
            }
        }
    }

    /// Force back to `Idle`, returning the discarded pass start if any.
    pub fn reset(&mut self) -> Option<PitchPoint> {
        let discarded = self.pending_pass_start();
        self.state = CaptureState::Idle;
        discarded
    }
}

pub fn build_shot(point: PitchPoint, attrs: &AttributeConfig) -> ShotEvent {
    ShotEvent {
        x: point.x,
        y: point.y,
        outcome: attrs.outcome,
        body_part: attrs.body_part,
        assist_type: attrs.assist_type,
        xg: expected_goals(point, attrs.outcome, attrs.body_part),
        phase: attrs.phase,
        zone: attrs.zone,
    }
}

pub fn build_pass(start: PitchPoint, end: PitchPoint, attrs: &AttributeConfig) -> PassEvent {
    PassEvent {
        start_x: start.x,
        start_y: start.y,
        end_x: end.x,
        end_y: end.y,
        completed: attrs.pass_completed,
        xa: expected_assists(end, attrs.pass_completed),
        phase: attrs.phase,
        zone: attrs.zone,
    }
}

pub fn build_defensive(point: PitchPoint, attrs: &AttributeConfig) -> DefensiveEvent {
    DefensiveEvent {
        x: point.x,
        y: point.y,
        action_type: attrs.action_type,
        success: attrs.success,
        phase: attrs.phase,
        zone: attrs.zone,
    }
}
