//! Error handling for Boardkit
//!
//! The interpret and materialize paths degrade to "did less than requested"
//! instead of failing, so errors here only cross the drawing-surface boundary
//! and the snapshot/export helpers.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing surface error type
///
/// Returned by a drawing surface when it refuses a shape-creation call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// A shape with the same id already exists on the surface
    #[error("Shape id already in use: {id}")]
    DuplicateId {
        /// The conflicting shape id.
        id: String,
    },

    /// The descriptor was rejected by the surface
    #[error("Shape rejected: {reason}")]
    Rejected {
        /// The reason the surface gave.
        reason: String,
    },

    /// The surface can no longer accept calls (torn down, read-only, ...)
    #[error("Drawing surface unavailable: {reason}")]
    Unavailable {
        /// Why the surface is unavailable.
        reason: String,
    },
}

impl SurfaceError {
    /// Create a rejection from a message
    pub fn rejected(reason: impl Into<String>) -> Self {
        SurfaceError::Rejected {
            reason: reason.into(),
        }
    }
}

/// Main error type for Boardkit
///
/// A unified error type for the fallible helpers in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Drawing surface error
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error came from the drawing surface
    pub fn is_surface_error(&self) -> bool {
        matches!(self, Error::Surface(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
