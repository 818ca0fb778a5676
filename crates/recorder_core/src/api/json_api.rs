//! JSON API for driving a recording session
//!
//! The host (UI shell, test harness, CLI) sends a script of inputs and gets
//! back the committed event list plus history state. All session semantics
//! live in [`crate::engine::session`]; this layer only translates.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::analysis::EventSummary;
use crate::engine::{
    CaptureOutcome, KeyChord, PointerInput, RecorderConfig, RecordingSession, ShortcutRegistry,
    SurfaceRect,
};
use crate::error::{RecorderError, Result};
use crate::models::{AttributeConfig, Event, EventType, PitchPoint};

/// API version for schema compatibility
pub const API_SCHEMA_VERSION: &str = "v1";

/// Scripted session input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptRequest {
    #[serde(default)]
    pub schema_version: Option<String>,
    /// Session config; falls back to defaults
    #[serde(default)]
    pub config: Option<RecorderConfig>,
    /// Previously persisted events to open the session on
    #[serde(default)]
    pub initial_events: Vec<Event>,
    /// Capture surface used by `pointer` steps that carry no rect of their own
    #[serde(default)]
    pub surface: Option<SurfaceRect>,
    pub steps: Vec<ScriptStep>,
}

/// One user input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Click already in pitch coordinates
    Click { x: f64, y: f64 },
    /// Raw pointer position in client pixels
    Pointer {
        client_x: f64,
        client_y: f64,
        #[serde(default)]
        surface: Option<SurfaceRect>,
    },
    SelectType { event_type: EventType },
    SetAttributes { attributes: AttributeConfig },
    SetRecording { enabled: bool },
    ToggleRecording,
    Delete { index: usize },
    Clear,
    Replace { index: usize, event: Event },
    Undo,
    Redo,
    /// Key chord such as "Ctrl+Z"
    Key { chord: String },
}

/// What a step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepResult {
    Committed,
    PassStarted,
    Ignored,
    /// Ambient input changed (tab, attributes, recording flag)
    Applied,
    /// History moved (undo, redo, edit)
    Changed,
    NoOp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub schema_version: String,
    pub events: Vec<Event>,
    pub summary: EventSummary,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_len: usize,
    pub history_index: usize,
    /// Times the change hook fired
    pub notifications: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_pass_start: Option<PitchPoint>,
    pub step_results: Vec<StepResult>,
}

/// Run a script and return the JSON response.
pub fn run_script_json(request_json: &str) -> Result<String> {
    let request: ScriptRequest = serde_json::from_str(request_json)?;
    let response = run_script(request)?;
    Ok(serde_json::to_string(&response)?)
}

pub fn run_script(request: ScriptRequest) -> Result<ScriptResponse> {
    if let Some(version) = request.schema_version.as_deref() {
        if version != API_SCHEMA_VERSION {
            warn!("Rejecting script with schema version {}", version);
            return Err(RecorderError::UnsupportedSchema {
                found: version.to_string(),
                expected: API_SCHEMA_VERSION.to_string(),
            });
        }
    }

    let config = request.config.unwrap_or_default();
    config.validate()?;

    info!(
        "Running script: {} steps, {} initial events",
        request.steps.len(),
        request.initial_events.len()
    );

    let mut session = RecordingSession::with_events(&config, request.initial_events);
    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    session.set_on_events_change(move |_| counter.set(counter.get() + 1));

    let registry = ShortcutRegistry::new();
    session.attach_shortcuts(&registry);

    let mut step_results = Vec::with_capacity(request.steps.len());
    for (index, step) in request.steps.into_iter().enumerate() {
        let result = apply_step(&mut session, step, request.surface.as_ref(), index)?;
        debug!("Step {} -> {:?}", index, result);
        step_results.push(result);
    }

    let events = session.events().to_vec();
    let response = ScriptResponse {
        schema_version: API_SCHEMA_VERSION.to_string(),
        summary: EventSummary::from_events(&events),
        events,
        can_undo: session.can_undo(),
        can_redo: session.can_redo(),
        history_len: session.history().len(),
        history_index: session.history().index(),
        notifications: notifications.get(),
        pending_pass_start: session.pending_pass_start(),
        step_results,
    };

    session.detach_shortcuts();
    debug!("Shortcut listeners left: {}", registry.active_listeners());
    Ok(response)
}

fn apply_step(
    session: &mut RecordingSession,
    step: ScriptStep,
    default_surface: Option<&SurfaceRect>,
    index: usize,
) -> Result<StepResult> {
    let result = match step {
        ScriptStep::Click { x, y } => capture_result(session.handle_click(PitchPoint::new(x, y))),
        ScriptStep::Pointer { client_x, client_y, surface } => {
            let surface = surface.as_ref().or(default_surface);
            capture_result(session.handle_pointer(PointerInput::new(client_x, client_y), surface))
        }
        ScriptStep::SelectType { event_type } => {
            session.set_event_type(event_type);
            StepResult::Applied
        }
        ScriptStep::SetAttributes { attributes } => {
            session.set_attributes(attributes);
            StepResult::Applied
        }
        ScriptStep::SetRecording { enabled } => {
            session.set_recording(enabled);
            StepResult::Applied
        }
        ScriptStep::ToggleRecording => {
            session.toggle_recording();
            StepResult::Applied
        }
        ScriptStep::Delete { index } => changed(session.delete_at(index)),
        ScriptStep::Clear => changed(session.clear()),
        ScriptStep::Replace { index, event } => changed(session.replace_at(index, event)),
        ScriptStep::Undo => changed(session.undo()),
        ScriptStep::Redo => changed(session.redo()),
        ScriptStep::Key { chord } => {
            let chord: KeyChord = chord
                .parse()
                .map_err(|e| RecorderError::InvalidStep { index, reason: format!("{e}") })?;
            let before = session.history().index();
            match session.handle_key(&chord) {
                Some(_) if session.history().index() != before => StepResult::Changed,
                _ => StepResult::NoOp,
            }
        }
    };
    Ok(result)
}

fn capture_result(outcome: CaptureOutcome) -> StepResult {
    match outcome {
        CaptureOutcome::Committed(_) => StepResult::Committed,
        CaptureOutcome::PassStarted(_) => StepResult::PassStarted,
        CaptureOutcome::Ignored => StepResult::Ignored,
    }
}

fn changed(applied: bool) -> StepResult {
    if applied {
        StepResult::Changed
    } else {
        StepResult::NoOp
    }
}

/// JSON schema of the event list handed to persistence collaborators
pub fn event_list_schema() -> Result<String> {
    let schema = schemars::schema_for!(Vec<Event>);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn run(request: Value) -> Value {
        let out = run_script_json(&request.to_string()).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_shot_pass_defensive_script() {
        let response = run(json!({
            "schema_version": "v1",
            "config": { "start_recording": true },
            "steps": [
                { "op": "click", "x": 90.0, "y": 50.0 },
                { "op": "select_type", "event_type": "pass" },
                { "op": "click", "x": 40.0, "y": 40.0 },
                { "op": "click", "x": 100.0, "y": 50.0 },
                { "op": "select_type", "event_type": "defensive" },
                { "op": "set_attributes", "attributes": { "actionType": "clearance", "success": false } },
                { "op": "click", "x": 10.0, "y": 20.0 }
            ]
        }));

        let events = response["events"].as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["type"], "shot");
        assert_eq!(events[1]["type"], "pass");
        assert_eq!(events[2]["actionType"], "clearance");
        assert_eq!(response["notifications"], 3);
        assert_eq!(response["history_len"], 4);
        assert_eq!(
            response["step_results"],
            json!(["committed", "applied", "pass_started", "committed", "applied", "applied", "committed"])
        );
        assert_eq!(response["summary"]["shots"], 1);
    }

    #[test]
    fn test_not_recording_ignores_clicks() {
        let response = run(json!({
            "steps": [
                { "op": "click", "x": 90.0, "y": 50.0 },
                { "op": "toggle_recording" },
                { "op": "click", "x": 90.0, "y": 50.0 }
            ]
        }));
        assert_eq!(response["events"].as_array().unwrap().len(), 1);
        assert_eq!(response["step_results"][0], "ignored");
    }

    #[test]
    fn test_pointer_uses_request_surface() {
        let response = run(json!({
            "config": { "start_recording": true },
            "surface": { "left": 0.0, "top": 0.0, "width": 200.0, "height": 100.0 },
            "steps": [
                { "op": "pointer", "client_x": 180.0, "client_y": 50.0 },
                { "op": "pointer", "client_x": 10.0, "client_y": 10.0,
                  "surface": { "left": 0.0, "top": 0.0, "width": 0.0, "height": 0.0 } }
            ]
        }));
        let events = response["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["x"], 90.0);
        assert_eq!(response["step_results"][1], "ignored");
    }

    #[test]
    fn test_pointer_without_any_surface_is_ignored() {
        let response = run(json!({
            "config": { "start_recording": true },
            "steps": [ { "op": "pointer", "client_x": 10.0, "client_y": 10.0 } ]
        }));
        assert_eq!(response["step_results"][0], "ignored");
        assert_eq!(response["notifications"], 0);
    }

    #[test]
    fn test_undo_redo_and_keys() {
        let response = run(json!({
            "config": { "start_recording": true },
            "steps": [
                { "op": "click", "x": 90.0, "y": 50.0 },
                { "op": "click", "x": 80.0, "y": 50.0 },
                { "op": "key", "chord": "Ctrl+Z" },
                { "op": "undo" },
                { "op": "undo" },
                { "op": "key", "chord": "Cmd+Shift+Z" },
                { "op": "key", "chord": "Ctrl+X" }
            ]
        }));
        assert_eq!(response["events"].as_array().unwrap().len(), 1);
        assert_eq!(response["can_undo"], true);
        assert_eq!(response["can_redo"], true);
        assert_eq!(
            response["step_results"],
            json!(["committed", "committed", "changed", "changed", "no_op", "changed", "no_op"])
        );
    }

    #[test]
    fn test_initial_events_and_edits() {
        let response = run(json!({
            "initial_events": [
                { "type": "defensive", "x": 30.0, "y": 30.0, "actionType": "block", "success": true,
                  "phase": "out_possession", "zone": "build_up" },
                { "type": "shot", "x": 120.0, "y": 50.0, "outcome": "miss", "bodyPart": "foot",
                  "assistType": "corner", "xG": 0.0, "phase": "in_possession", "zone": "finishing" }
            ],
            "steps": [
                { "op": "delete", "index": 7 },
                { "op": "replace", "index": 0, "event": { "type": "defensive", "x": 35.0, "y": 30.0,
                  "actionType": "tackle", "success": false, "phase": "out_possession", "zone": "build_up" } },
                { "op": "clear" },
                { "op": "clear" }
            ]
        }));
        assert_eq!(response["step_results"], json!(["no_op", "changed", "changed", "no_op"]));
        assert_eq!(response["events"].as_array().unwrap().len(), 0);
        assert_eq!(response["history_len"], 3);
    }

    #[test]
    fn test_seeded_shot_is_normalized() {
        let request = ScriptRequest {
            schema_version: None,
            config: None,
            initial_events: vec![serde_json::from_value(json!({
                "type": "shot", "x": 120.0, "y": 50.0, "outcome": "miss", "bodyPart": "foot",
                "assistType": "corner", "xG": 0.0, "phase": "in_possession", "zone": "finishing"
            }))
            .unwrap()],
            surface: None,
            steps: vec![],
        };
        let response = run_script(request).unwrap();
        let Event::Shot(shot) = &response.events[0] else { panic!("expected shot") };
        assert_eq!(shot.x, 100.0);
        assert_eq!(shot.xg, 1.0);
    }

    #[test]
    fn test_pending_pass_start_reported() {
        let response = run(json!({
            "config": { "start_recording": true, "default_event_type": "pass" },
            "steps": [ { "op": "click", "x": 40.0, "y": 40.0 } ]
        }));
        assert_eq!(response["pending_pass_start"], json!({ "x": 40.0, "y": 40.0 }));
        assert_eq!(response["events"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_rejects_unknown_schema() {
        let err = run_script_json(r#"{"schema_version": "v9", "steps": []}"#).unwrap_err();
        assert!(matches!(err, RecorderError::UnsupportedSchema { .. }));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = run_script_json(r#"{"config": {"history_limit": 0}, "steps": []}"#).unwrap_err();
        assert!(matches!(err, RecorderError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_bad_chord() {
        let err = run_script_json(r#"{"steps": [{"op": "key", "chord": "Ctrl+Enter"}]}"#).unwrap_err();
        assert!(matches!(err, RecorderError::InvalidStep { index: 0, .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = run_script_json("{ nope").unwrap_err();
        assert!(matches!(err, RecorderError::Json(_)));
    }

    #[test]
    fn test_schema_mentions_event_tags() {
        let schema = event_list_schema().unwrap();
        assert!(schema.contains("\"shot\""));
        assert!(schema.contains("\"xG\""));
        assert!(schema.contains("\"startX\""));
    }
}
