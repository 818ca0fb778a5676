pub mod capture; // Idle / AwaitingPassEnd click state machine
pub mod config;
pub mod coordinates;
pub mod history; // Bounded undo/redo snapshot log
pub mod metric_engine; // xG / xA
pub mod session;
pub mod shortcuts; // Undo/redo key bindings with scoped registration

pub use capture::{build_defensive, build_pass, build_shot, CaptureOutcome, CaptureState, EventCapture};
pub use config::{RecorderConfig, CONFIG_PATH_ENV};
pub use coordinates::{to_pitch_point, PointerInput, SurfaceRect};
pub use history::{HistoryStore, DEFAULT_HISTORY_LIMIT};
pub use metric_engine::{expected_assists, expected_goals, GOAL_POINT, XA_MAX, XG_MAX};
pub use session::{ChangeHook, RecordingSession};
pub use shortcuts::{KeyChord, ShortcutAction, ShortcutGuard, ShortcutRegistry};
