use std::fmt;

/// Result type for pacing operations
pub type Result<T> = std::result::Result<T, PaceError>;

/// Errors that can occur when constructing or driving a pacer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceError {
    /// Invalid configuration (zero interval or quiet period)
    InvalidInterval(&'static str),

    /// No Tokio runtime available to schedule the deferred callback
    NoRuntime,
}

impl fmt::Display for PaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaceError::InvalidInterval(msg) => write!(f, "Invalid pacer configuration: {}", msg),
            PaceError::NoRuntime => write!(f, "No Tokio runtime available for deferred execution"),
        }
    }
}

impl std::error::Error for PaceError {}
