//! # recorder_core - Match Event Capture Engine
//!
//! This library turns pointer input on a pitch surface into football match
//! events and keeps an undoable log of them.
//!
//! ## Features
//! - Shots, passes (two clicks) and defensive actions captured from clicks
//! - Deterministic xG / xA from geometry and categorical attributes
//! - Bounded undo/redo history with future truncation
//! - JSON API for driving a session from another runtime

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]

pub mod analysis;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{event_list_schema, run_script_json, ScriptRequest, ScriptResponse, ScriptStep};

pub use analysis::EventSummary;
pub use engine::{
    expected_assists, expected_goals, to_pitch_point, CaptureOutcome, CaptureState, EventCapture,
    HistoryStore, KeyChord, PointerInput, RecorderConfig, RecordingSession, ShortcutAction,
    ShortcutGuard, ShortcutRegistry, SurfaceRect,
};
pub use error::{RecorderError, Result};
pub use models::{
    ActionType, AssistType, AttributeConfig, BodyPart, DefensiveEvent, Event, EventType, PassEvent,
    Phase, PitchPoint, ShotEvent, ShotOutcome, Zone,
};
