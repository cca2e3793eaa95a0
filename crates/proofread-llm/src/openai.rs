//! OpenAI-compatible chat-completions transport
//!
//! Sends one HTTPS POST per call with a bearer token and a JSON body, and
//! hands back the raw status and body. No retries: a failed call is reported
//! once and the caller decides what to do with it.
//!
//! # Examples
//!
//! ```no_run
//! use proofread_llm::OpenAiTransport;
//! use proofread_domain::AnalysisTransport;
//!
//! let transport = OpenAiTransport::default_endpoint()?;
//! let response = transport.post_json("sk-...", r#"{"model":"gpt-4o-mini","messages":[]}"#)?;
//! println!("HTTP {}", response.status);
//! # Ok::<(), proofread_llm::LlmError>(())
//! ```

use crate::LlmError;
use proofread_domain::{AnalysisTransport, TransportResponse};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default timeout for analysis requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Blocking HTTPS transport for the analysis service
///
/// Must not be created or dropped on an async runtime thread; run it on a
/// plain thread or inside `tokio::task::spawn_blocking`.
#[derive(Debug, Clone)]
pub struct OpenAiTransport {
    endpoint: String,
    client: Client,
}

impl OpenAiTransport {
    /// Create a new transport
    ///
    /// # Parameters
    ///
    /// - `endpoint`: full chat-completions URL
    /// - `timeout`: per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Create a transport for the public OpenAI endpoint with the default timeout
    pub fn default_endpoint() -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// The URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisTransport for OpenAiTransport {
    type Error = LlmError;

    fn post_json(&self, api_key: &str, body: &str) -> Result<TransportResponse, Self::Error> {
        debug!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .body(body.to_string())
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        debug!("HTTP {} ({} bytes)", status, text.len());

        Ok(TransportResponse::new(status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_transport_creation() {
        let transport =
            OpenAiTransport::new("http://localhost:8081/v1/chat/completions", Duration::from_secs(5))
                .unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:8081/v1/chat/completions");
    }

    #[test]
    fn test_openai_transport_default_endpoint() {
        let transport = OpenAiTransport::default_endpoint().unwrap();
        assert_eq!(transport.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_openai_transport_connection_error() {
        // Nothing listens on port 9: the single attempt must fail without retrying
        let transport =
            OpenAiTransport::new("http://127.0.0.1:9/v1/chat/completions", Duration::from_secs(2))
                .unwrap();

        let result = transport.post_json("sk-test", "{}");
        match result {
            Err(LlmError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    // Integration test (requires network access and a real key)
    #[test]
    #[ignore]
    fn test_openai_unauthorized_integration() {
        let transport = OpenAiTransport::default_endpoint().unwrap();
        let response = transport.post_json("sk-invalid", "{}").unwrap();
        assert_eq!(response.status, 401);
    }
}
