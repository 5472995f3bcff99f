//! Error types for the booking library.
//!
//! The engine and the pricing calculator never fail; invalid edits are
//! rejected as no-ops. Errors only arise at the edges: loading catalogs,
//! reading or writing the session file, parsing user input and gating wizard
//! steps.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for everything around the booking engine.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Reference catalog could not be used
    #[error("Catalog error: {message}")]
    Catalog { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A stored configuration breaks one of the configuration invariants
    #[error("Invalid session state: {reason}")]
    InvalidSession { reason: String },
    /// A wizard step was entered before its precondition was met
    #[error("Cannot open the {step} step: {reason}")]
    StepLocked { step: String, reason: String },
    /// A meal slot is not selectable in the current configuration
    #[error("Cannot choose {meal_type} on day {day}: {reason}")]
    SlotLocked {
        /// 1-based trip day
        day: usize,
        meal_type: String,
        reason: String,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BookingError {
        BookingError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BookingError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Creates an invalid session error.
    pub fn invalid_session(reason: impl Into<String>) -> Self {
        Self::InvalidSession {
            reason: reason.into(),
        }
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait FsResultExt<T> {
    /// Map an I/O error into [`BookingError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| BookingError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;
