//! Error types for the engine boundary.

use core::fmt;

/// Errors produced by requests to the engine. None of these are fatal to the
/// client; they surface as log notices and leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The engine could not be reached at all.
    Transport(String),
    /// The request exceeded the client-side deadline.
    Timeout,
    /// The engine answered non-2xx with a human-readable reason.
    Rejected { detail: String },
    /// The body did not match the expected shape.
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "engine unreachable: {}", e),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Rejected { detail } => write!(f, "{}", detail),
            ApiError::Malformed(e) => write!(f, "malformed response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
