//! Error handling for the backend IR
//! 
//! Construction errors raised by the IR crates are contract violations of
//! the upstream passes. They are converted into a `CompilerError` (with a
//! source location when the caller has one) and reported as diagnostics.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type for everything below semantic analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Backend error at {location}: {message}")]
    BackendError {
        location: SourceLocation,
        message: String,
    },

    #[error("Unknown target machine '{name}'")]
    InvalidTarget { name: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    /// Create a backend error at a known location
    pub fn backend_error(message: String, location: SourceLocation) -> Self {
        CompilerError::BackendError { location, message }
    }

    /// Create an internal error
    pub fn internal_error(message: String) -> Self {
        CompilerError::InternalError { message }
    }

    /// Source location attached to this error, if any
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            CompilerError::BackendError { location, .. } => Some(location),
            _ => None,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}
