//! Error types for the Boardwalk library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`BoardwalkError`]. The engine itself is deliberately tolerant: scoring and
//! resolution degrade malformed inputs into zero-effort marker results rather
//! than failing, so most variants here surface at the construction and I/O
//! boundaries.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Boardwalk operations.
#[derive(Error, Debug)]
pub enum BoardwalkError {
    /// I/O errors (reading boundary JSON files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Zero or negative grid dimensions, or otherwise impossible geometry.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A record field that cannot be interpreted (e.g. a non-numeric score).
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A referenced page or table entry that cannot be located.
    #[error("Missing resource: {0}")]
    MissingResource(String),

    /// Board construction/validation errors.
    #[error("Board error: {0}")]
    Board(String),

    /// Sentence resolution errors.
    #[error("Resolve error: {0}")]
    Resolve(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BoardwalkError.
pub type Result<T> = std::result::Result<T, BoardwalkError>;

impl BoardwalkError {
    /// Create a new invalid geometry error.
    pub fn invalid_geometry<S: Into<String>>(msg: S) -> Self {
        BoardwalkError::InvalidGeometry(msg.into())
    }

    /// Create a new malformed record error.
    pub fn malformed_record<S: Into<String>>(msg: S) -> Self {
        BoardwalkError::MalformedRecord(msg.into())
    }

    /// Create a new missing resource error.
    pub fn missing_resource<S: Into<String>>(msg: S) -> Self {
        BoardwalkError::MissingResource(msg.into())
    }

    /// Create a new board error.
    pub fn board<S: Into<String>>(msg: S) -> Self {
        BoardwalkError::Board(msg.into())
    }

    /// Create a new resolve error.
    pub fn resolve<S: Into<String>>(msg: S) -> Self {
        BoardwalkError::Resolve(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BoardwalkError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BoardwalkError::invalid_geometry("grid has 0 rows");
        assert_eq!(error.to_string(), "Invalid geometry: grid has 0 rows");

        let error = BoardwalkError::malformed_record("effort score 'abc'");
        assert_eq!(error.to_string(), "Malformed record: effort score 'abc'");

        let error = BoardwalkError::missing_resource("page 'Food'");
        assert_eq!(error.to_string(), "Missing resource: page 'Food'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BoardwalkError::from(io_error);

        match error {
            BoardwalkError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
