//! Core Checker implementation

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::parser::interpret;
use crate::prompt::{build_prompt, build_request_payload};
use crate::types::CheckReport;
use proofread_domain::{AnalysisTransport, Issue};
use std::fmt::Display;
use tracing::{debug, error, info};

/// The Checker sends text to the analysis service and returns the issues found
///
/// It holds no mutable state: configuration is passed into every call, and
/// concurrent callers can share one Checker as long as the transport allows it.
pub struct Checker<T>
where
    T: AnalysisTransport,
{
    transport: T,
}

impl<T> Checker<T>
where
    T: AnalysisTransport,
    T::Error: Display,
{
    /// Create a new Checker
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The transport used for the round trip
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check `text` and return the issues found
    ///
    /// Blank text returns no issues without contacting the service. Otherwise
    /// exactly one request is made.
    ///
    /// # Errors
    ///
    /// - [`CheckError::MissingCredential`] when `config.api_key` is empty (no request is made)
    /// - [`CheckError::Config`] when the configuration is invalid (no request is made)
    /// - [`CheckError::Transport`] when no HTTP answer was received
    /// - [`CheckError::RemoteService`] when the service answered with a non-200 status
    ///
    /// An answer that cannot be interpreted is not an error: it yields no issues.
    pub fn check(&self, text: &str, config: &CheckerConfig) -> Result<Vec<Issue>, CheckError> {
        if text.trim().is_empty() {
            debug!("Skipping check of blank text");
            return Ok(Vec::new());
        }

        if !config.has_api_key() {
            return Err(CheckError::MissingCredential);
        }

        config.validate().map_err(CheckError::Config)?;

        info!(
            "Checking {} chars with model '{}' (max_tokens {})",
            text.chars().count(),
            config.model,
            config.max_tokens
        );

        let prompt = build_prompt(text);
        let payload = build_request_payload(&prompt, &config.model, config.max_tokens);
        let body = serde_json::to_string(&payload)?;

        debug!("Request body length: {} bytes", body.len());

        let response = self
            .transport
            .post_json(&config.api_key, &body)
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        if !response.is_success() {
            return Err(CheckError::RemoteService {
                code: response.status,
            });
        }

        let issues = interpret(&response.body, text);

        info!("Check complete: {} issues", issues.len());

        Ok(issues)
    }

    /// Check `text`, reducing every failure to an empty issue list
    ///
    /// The failure is logged at error level and kept in
    /// [`CheckReport::diagnostic`] so callers can still tell "no issues" from
    /// "the check did not run".
    pub fn check_or_empty(&self, text: &str, config: &CheckerConfig) -> CheckReport {
        match self.check(text, config) {
            Ok(issues) => CheckReport {
                issues,
                diagnostic: None,
            },
            Err(e) => {
                error!("Error checking text: {}", e);
                CheckReport {
                    issues: Vec::new(),
                    diagnostic: Some(e.to_string()),
                }
            }
        }
    }
}
