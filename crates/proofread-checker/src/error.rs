//! Error types for the Checker

use thiserror::Error;

/// Errors that can occur during a check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// No API key configured
    #[error("API key not configured. Set OPENAI_API_KEY or api_key in the config file")]
    MissingCredential,

    /// Analysis service answered with a non-200 status
    #[error("Analysis service returned error code: {code}")]
    RemoteService {
        /// HTTP status code
        code: u16,
    },

    /// Request never got an HTTP answer (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request payload could not be serialized
    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CheckError {
    fn from(e: serde_json::Error) -> Self {
        CheckError::Serialization(e.to_string())
    }
}

/// Reasons an analysis answer could not be interpreted
///
/// Never leaves the crate: every variant degrades to an empty issue list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum InterpretError {
    /// Outer envelope is not the expected chat-completions object
    #[error("Invalid response envelope: {0}")]
    InvalidEnvelope(String),

    /// `choices` array is empty
    #[error("Response contains no choices")]
    NoChoices,

    /// Content has no `[ ... ]` span
    #[error("No JSON array found in message content")]
    MissingArray,

    /// Bracketed span is not a JSON array
    #[error("Invalid issue array: {0}")]
    InvalidArray(String),

    /// An array element is not an object
    #[error("Issue {0} is not a JSON object")]
    NotAnObject(usize),
}
