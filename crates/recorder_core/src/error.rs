use thiserror::Error;

/// Errors raised at the boundary of the recorder (config files, JSON API).
///
/// Capture, metrics and history operations are total and never produce one
/// of these; guarded input there is a silent no-op.
#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: String, expected: String },

    #[error("Invalid script step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

impl RecorderError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            RecorderError::Io(_) => true,
            RecorderError::Json(_) => false,
            RecorderError::InvalidConfig { .. } => false,
            RecorderError::UnsupportedSchema { .. } => false,
            RecorderError::InvalidStep { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecorderError>;
