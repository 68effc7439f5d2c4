//! Shared error types for the application

use thiserror::Error;

/// Main error type for bizdoctor operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input or record validation failures, all messages joined
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record with the same id already exists in the store
    #[error("Duplicate {kind} record: {id}")]
    DuplicateRecord { kind: &'static str, id: String },

    /// A record lookup found nothing
    #[error("No {kind} record found for {id}")]
    NotFound { kind: &'static str, id: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error from a list of messages
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = messages
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>()
            .join("; ");
        Self::Validation(joined)
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias for bizdoctor operations
pub type Result<T> = std::result::Result<T, Error>;
