use thiserror::Error;

/// Errors raised by the timeline engine and its settings loader.
///
/// Out-of-range times and conflicting drags are not errors: the engine clamps
/// or ignores them so the UI always shows an in-bounds state.
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("timeline duration must be positive and finite, got {duration}")]
    InvalidDomain { duration: f64 },

    #[error("timeline width must be positive and finite, got {width}")]
    InvalidWidth { width: f64 },

    #[error("invalid timeline settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
