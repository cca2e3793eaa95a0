//! Proofread Checker
//!
//! Sends text to a remote language-analysis service and recovers a list of
//! writing issues from its answer.
//!
//! # Architecture
//!
//! ```text
//! Text → Checker → prompt → AnalysisTransport → interpret → Vec<Issue>
//! ```
//!
//! # Key Features
//!
//! - **One-shot requests**: a single user message per check, one round trip, no retries
//! - **Tolerant interpretation**: the issue array is recovered from prose-wrapped answers
//! - **Explicit failures**: [`Checker::check`] returns a tagged result;
//!   [`Checker::check_or_empty`] opts into "failure means no issues"
//! - **Injected configuration**: a [`CheckerConfig`] snapshot is passed into every call
//!
//! # Example Usage
//!
//! ```
//! use proofread_checker::{Checker, CheckerConfig};
//! use proofread_llm::MockTransport;
//!
//! let transport = MockTransport::with_content(
//!     r#"Sure! [{"original":"teh","suggestion":"the","explanation":"typo","position":0}]"#,
//! );
//! let checker = Checker::new(transport);
//! let config = CheckerConfig {
//!     api_key: "sk-test".to_string(),
//!     ..Default::default()
//! };
//!
//! let issues = checker.check("teh cat sat", &config)?;
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].suggestion(), "the");
//! # Ok::<(), proofread_checker::CheckError>(())
//! ```

#![warn(missing_docs)]

mod checker;
mod config;
mod error;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use checker::Checker;
pub use config::{CheckerConfig, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use error::CheckError;
pub use parser::interpret;
pub use prompt::{build_prompt, build_request_payload};
pub use types::{ChatMessage, ChatRequest, CheckReport};
