//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document could not be read
    #[error("{0}")]
    Document(#[from] proofread_document::DocumentError),

    /// Check failed (strict mode only)
    #[error("Check failed: {0}")]
    Check(#[from] proofread_checker::CheckError),

    /// Transport could not be set up
    #[error("{0}")]
    Transport(#[from] proofread_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Background check task did not finish
    #[error("Background task failed: {0}")]
    Task(String),
}
