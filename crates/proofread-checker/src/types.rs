//! Request and response types for analysis

use proofread_domain::Issue;
use serde::{Deserialize, Serialize};

/// Single-message chat-completions request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,

    /// Output token budget
    pub max_tokens: u32,

    /// Conversation; always exactly one user message
    pub messages: Vec<ChatMessage>,
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker role ("user")
    pub role: String,

    /// Message text
    pub content: String,
}

/// Outer envelope of a chat-completions answer
///
/// Choices stay untyped; only the first one is ever decoded.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: String,
}

/// Outcome of a check whose failures were reduced to "no issues"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Issues in the order the service returned them
    pub issues: Vec<Issue>,

    /// Why the check failed, when it did
    pub diagnostic: Option<String>,
}

impl CheckReport {
    /// Whether the check failed and the empty issue list is not meaningful
    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}
