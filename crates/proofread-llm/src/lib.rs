//! Proofread LLM Transport Layer
//!
//! Implementations of the `AnalysisTransport` trait from `proofread-domain`.
//!
//! # Transports
//!
//! - `MockTransport`: Deterministic stub for testing, records every call
//! - `OpenAiTransport`: HTTPS POST to an OpenAI-compatible chat-completions endpoint
//!
//! # Examples
//!
//! ```
//! use proofread_llm::MockTransport;
//! use proofread_domain::AnalysisTransport;
//!
//! let transport = MockTransport::new(200, r#"{"choices": []}"#);
//! let response = transport.post_json("sk-test", "{}").unwrap();
//! assert_eq!(response.status, 200);
//! assert_eq!(transport.call_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod openai;

use proofread_domain::{AnalysisTransport, TransportResponse};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiTransport;

/// Errors that can occur while talking to the analysis service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be read
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A request captured by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// API key passed as the bearer token
    pub api_key: String,
    /// Serialized JSON body
    pub body: String,
}

/// Mock transport for deterministic testing
///
/// Returns a pre-configured status and body without making any network calls.
/// Clones share the same call log.
///
/// # Examples
///
/// ```
/// use proofread_llm::MockTransport;
/// use proofread_domain::AnalysisTransport;
///
/// let transport = MockTransport::new(500, "");
/// let response = transport.post_json("key", "{}").unwrap();
/// assert!(!response.is_success());
///
/// let failing = MockTransport::failing("connection refused");
/// assert!(failing.post_json("key", "{}").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockTransport {
    outcome: Result<TransportResponse, String>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a mock that answers every call with `status` and `body`
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: Ok(TransportResponse::new(status, body)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock answering HTTP 200 with a chat-completions envelope around `content`
    pub fn with_content(content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        });
        Self::new(200, body.to_string())
    }

    /// Create a mock whose every call fails at the transport level
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times `post_json` was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Get the most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl AnalysisTransport for MockTransport {
    type Error = LlmError;

    fn post_json(&self, api_key: &str, body: &str) -> Result<TransportResponse, Self::Error> {
        self.requests.lock().unwrap().push(RecordedRequest {
            api_key: api_key.to_string(),
            body: body.to_string(),
        });

        self.outcome
            .clone()
            .map_err(LlmError::Communication)
    }
}
