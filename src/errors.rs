//! Error types for document generation.
//!
//! Every failure aborts the run; nothing here is logged and swallowed.

use thiserror::Error;

/// Errors that can occur while generating the topics document.
#[derive(Debug, Error)]
pub enum DocError {
    /// A fixture is missing a field the formatting layer contract requires.
    #[error("malformed fixture {fixture}: {message}")]
    MalformedFixture { fixture: String, message: String },

    /// No fixture survived filtering.
    #[error("no documentable fixtures remain after filtering")]
    EmptyFixtureSet,

    /// The output destination could not be created or written.
    #[error("failed to write document: {path}: {message}")]
    Sink { path: String, message: String },

    /// The token source handed out the same token twice in one run.
    #[error("token {token:?} was issued twice in one run")]
    TokenCollision { token: String },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration: {path}: {message}")]
    Config { path: String, message: String },
}

impl DocError {
    pub(crate) fn malformed(fixture: &str, message: impl Into<String>) -> Self {
        DocError::MalformedFixture {
            fixture: fixture.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for document generation.
pub type DocResult<T> = Result<T, DocError>;
