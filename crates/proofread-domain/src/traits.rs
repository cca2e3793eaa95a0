//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Raw answer from the remote analysis service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body, unparsed
    pub body: String,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only HTTP 200 counts as success for the analysis service
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Trait for the "send JSON, receive JSON-or-error" primitive
///
/// Implemented by the infrastructure layer (proofread-llm). Implementations
/// perform exactly one request per call and never retry.
pub trait AnalysisTransport {
    /// Error type for transport failures (connection, TLS, timeout)
    type Error;

    /// POST a serialized JSON body, authorized with `api_key` as a bearer token
    fn post_json(&self, api_key: &str, body: &str) -> Result<TransportResponse, Self::Error>;
}
