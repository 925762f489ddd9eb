//! Error types for fixture loading.

use thiserror::Error;
use topics_doc::DocError;

/// Errors that can occur while loading fixtures or generating from them.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A fixture file or directory could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture file is not a JSON array of fixture records.
    #[error("failed to parse fixture: {path}: {message}")]
    Parse { path: String, message: String },

    /// Document generation failed.
    #[error(transparent)]
    Doc(#[from] DocError),
}

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
