//! Recording session controller
//!
//! Owns every piece of mutable recorder state: the recording flag, the
//! selected tab, the attribute selectors, the capture state machine and the
//! snapshot history. The visible event list is always the history's current
//! snapshot.
//!
//! Every committed mutation (append, delete, clear, replace, undo, redo)
//! invokes the change hook exactly once. No-ops never do.

use std::fmt;

use super::capture::{CaptureOutcome, CaptureState, EventCapture};
use super::config::RecorderConfig;
use super::coordinates::{to_pitch_point, PointerInput, SurfaceRect};
use super::history::HistoryStore;
use super::shortcuts::{KeyChord, ShortcutAction, ShortcutGuard, ShortcutRegistry};
use crate::models::{AttributeConfig, Event, EventType, PitchPoint};

/// Callback receiving the full event list after each committed change
pub type ChangeHook = Box<dyn FnMut(&[Event])>;

pub struct RecordingSession {
    recording: bool,
    event_type: EventType,
    attributes: AttributeConfig,
    capture: EventCapture,
    history: HistoryStore<Vec<Event>>,
    on_events_change: Option<ChangeHook>,
    shortcuts: Option<ShortcutGuard>,
}

impl fmt::Debug for RecordingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSession")
            .field("recording", &self.recording)
            .field("event_type", &self.event_type)
            .field("attributes", &self.attributes)
            .field("capture", &self.capture.state())
            .field("events", &self.events().len())
            .field("history_index", &self.history.index())
            .field("history_len", &self.history.len())
            .field("has_hook", &self.on_events_change.is_some())
            .field("shortcuts", &self.shortcuts.as_ref().map(ShortcutGuard::id))
            .finish()
    }
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new(&RecorderConfig::default())
    }
}

impl RecordingSession {
    /// Open a session with an empty event list.
    pub fn new(config: &RecorderConfig) -> Self {
        Self::with_events(config, Vec::new())
    }

    /// Open a session on a previously persisted event list.
    ///
    /// The seed becomes the single initial snapshot; there is nothing to undo.
    /// Coordinates are clamped and metrics recomputed on the way in.
    pub fn with_events(config: &RecorderConfig, events: Vec<Event>) -> Self {
        let events: Vec<Event> = events.into_iter().map(Event::normalized).collect();
        log::debug!(
            "Recording session opened with {} events (history limit {})",
            events.len(),
            config.history_limit
        );
        Self {
            recording: config.start_recording,
            event_type: config.default_event_type,
            attributes: config.default_attributes,
            capture: EventCapture::new(),
            history: HistoryStore::new(events, config.history_limit),
            on_events_change: None,
            shortcuts: None,
        }
    }

    // ========================
    // Ambient inputs
    // ========================

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Enable or disable recording. Disabling drops any pending pass start.
    pub fn set_recording(&mut self, recording: bool) {
        if !recording {
            if let Some(start) = self.capture.reset() {
                log::debug!("Recording stopped, discarded pass start at ({:.1}, {:.1})", start.x, start.y);
            }
        }
        self.recording = recording;
    }

    pub fn toggle_recording(&mut self) -> bool {
        self.set_recording(!self.recording);
        self.recording
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Switch the event-type tab. A pending pass start does not survive a switch.
    pub fn set_event_type(&mut self, event_type: EventType) {
        if event_type != self.event_type {
            if let Some(start) = self.capture.reset() {
                log::debug!(
                    "Tab switched to {:?}, discarded pass start at ({:.1}, {:.1})",
                    event_type,
                    start.x,
                    start.y
                );
            }
        }
        self.event_type = event_type;
    }

    pub fn attributes(&self) -> &AttributeConfig {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeConfig {
        &mut self.attributes
    }

    pub fn set_attributes(&mut self, attributes: AttributeConfig) {
        self.attributes = attributes;
    }

    /// Register the hook fired after every committed change.
    pub fn set_on_events_change<F>(&mut self, hook: F)
    where
        F: FnMut(&[Event]) + 'static,
    {
        self.on_events_change = Some(Box::new(hook));
    }

    pub fn clear_on_events_change(&mut self) {
        self.on_events_change = None;
    }

    // ========================
    // Capture
    // ========================

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// Transient marker for a pass waiting on its end click
    pub fn pending_pass_start(&self) -> Option<PitchPoint> {
        self.capture.pending_pass_start()
    }

    /// Raw pointer click on the capture surface.
    pub fn handle_pointer(
        &mut self,
        pointer: PointerInput,
        surface: Option<&SurfaceRect>,
    ) -> CaptureOutcome {
        match to_pitch_point(pointer, surface, self.recording) {
            Some(point) => self.handle_click(point),
            None => {
                log::trace!("Pointer at ({}, {}) ignored", pointer.client_x, pointer.client_y);
                CaptureOutcome::Ignored
            }
        }
    }

    /// Click already mapped onto the pitch grid.
    pub fn handle_click(&mut self, point: PitchPoint) -> CaptureOutcome {
        if !self.recording {
            log::trace!("Click ignored, recording disabled");
            return CaptureOutcome::Ignored;
        }

        let outcome = self.capture.click(point.clamped(), self.event_type, &self.attributes);
        if let CaptureOutcome::Committed(event) = &outcome {
            self.append(event.clone());
        }
        outcome
    }

    // ========================
    // Event store
    // ========================

    /// Currently visible events, in insertion order
    pub fn events(&self) -> &[Event] {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryStore<Vec<Event>> {
        &self.history
    }

    /// Append one event. Coordinates are clamped and metrics recomputed.
    pub fn append(&mut self, event: Event) {
        let mut next = self.events().to_vec();
        next.push(event.normalized());
        self.commit(next, "append");
    }

    /// Remove the event at `index`. Returns false (and commits nothing) when out of range.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if index >= self.events().len() {
            log::trace!("Delete at {} ignored, {} events", index, self.events().len());
            return false;
        }
        let mut next = self.events().to_vec();
        next.remove(index);
        self.commit(next, "delete");
        true
    }

    /// Remove every event. Returns false (and commits nothing) when already empty.
    pub fn clear(&mut self) -> bool {
        if self.events().is_empty() {
            return false;
        }
        self.commit(Vec::new(), "clear");
        true
    }

    /// Explicit edit of one event. Coordinates are clamped and metrics recomputed.
    pub fn replace_at(&mut self, index: usize, event: Event) -> bool {
        if index >= self.events().len() {
            log::trace!("Replace at {} ignored, {} events", index, self.events().len());
            return false;
        }
        let mut next = self.events().to_vec();
        next[index] = event.normalized();
        self.commit(next, "replace");
        true
    }

    // ========================
    // History
    // ========================

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        log::debug!("Undo -> snapshot {}/{}", self.history.index(), self.history.len());
        self.notify();
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        log::debug!("Redo -> snapshot {}/{}", self.history.index(), self.history.len());
        self.notify();
        true
    }

    fn commit(&mut self, next: Vec<Event>, reason: &str) {
        self.history.commit(next);
        log::debug!(
            "Commit ({}): {} events, snapshot {}/{}",
            reason,
            self.events().len(),
            self.history.index(),
            self.history.len()
        );
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(hook) = self.on_events_change.as_mut() {
            hook(self.history.current().as_slice());
        }
    }

    // ========================
    // Keyboard shortcuts
    // ========================

    /// Register undo/redo shortcuts for the lifetime of this session
    /// (or until [`Self::detach_shortcuts`]).
    pub fn attach_shortcuts(&mut self, registry: &ShortcutRegistry) {
        self.shortcuts = Some(registry.acquire());
    }

    pub fn detach_shortcuts(&mut self) {
        self.shortcuts = None;
    }

    pub fn shortcuts_attached(&self) -> bool {
        self.shortcuts.as_ref().is_some_and(ShortcutGuard::is_active)
    }

    /// Handle a key press. Returns the action when the chord is a bound
    /// shortcut, whether or not history moved.
    pub fn handle_key(&mut self, chord: &KeyChord) -> Option<ShortcutAction> {
        let action = self.shortcuts.as_ref()?.resolve(chord)?;
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
        };
        Some(action)
    }
}
