//! Interpret analysis service answers into issues

use crate::error::InterpretError;
use crate::types::{ChatChoice, ChatResponse};
use proofread_domain::Issue;
use serde_json::Value;
use tracing::{debug, warn};

/// Recover the issues from a raw chat-completions response body
///
/// Never fails: any problem with the envelope, the embedded array or one of
/// its elements discards the whole answer and yields an empty list. Issues are
/// returned in array order and are not checked against `original_text`.
pub fn interpret(raw_response_body: &str, original_text: &str) -> Vec<Issue> {
    match try_interpret(raw_response_body) {
        Ok(issues) => {
            debug!(
                "Interpreted {} issues from a {} byte submission",
                issues.len(),
                original_text.len()
            );
            issues
        }
        Err(e) => {
            warn!("Discarding analysis answer: {}", e);
            Vec::new()
        }
    }
}

fn try_interpret(raw_response_body: &str) -> Result<Vec<Issue>, InterpretError> {
    let content = message_content(raw_response_body)?;
    let array_str = extract_json_array(&content)?;

    let json: Value = serde_json::from_str(array_str)
        .map_err(|e| InterpretError::InvalidArray(e.to_string()))?;

    let items = json
        .as_array()
        .ok_or_else(|| InterpretError::InvalidArray("Expected JSON array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| parse_issue_json(idx, item))
        .collect()
}

/// Content string of the first choice's message
fn message_content(raw_response_body: &str) -> Result<String, InterpretError> {
    let response: ChatResponse = serde_json::from_str(raw_response_body)
        .map_err(|e| InterpretError::InvalidEnvelope(e.to_string()))?;

    let first = response
        .choices
        .into_iter()
        .next()
        .ok_or(InterpretError::NoChoices)?;

    let choice: ChatChoice = serde_json::from_value(first)
        .map_err(|e| InterpretError::InvalidEnvelope(e.to_string()))?;

    Ok(choice.message.content)
}

/// Slice from the first `[` to the last `]`, inclusive
///
/// The service often wraps the array in prose ("Here are the issues: ...")
/// or a markdown fence, so the content is never parsed as a whole.
fn extract_json_array(content: &str) -> Result<&str, InterpretError> {
    let start = content.find('[').ok_or(InterpretError::MissingArray)?;
    let end = content.rfind(']').ok_or(InterpretError::MissingArray)?;

    if end < start {
        return Err(InterpretError::MissingArray);
    }

    Ok(&content[start..=end])
}

/// Build one issue from a JSON object, defaulting missing or mistyped fields
fn parse_issue_json(idx: usize, json: &Value) -> Result<Issue, InterpretError> {
    let obj = json.as_object().ok_or(InterpretError::NotAnObject(idx))?;

    let text_field = |key: &str| {
        obj.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    Ok(Issue::new(
        text_field("original"),
        text_field("suggestion"),
        text_field("explanation"),
        read_position(obj.get("position")),
    ))
}

/// Non-negative integer position; anything else is 0
///
/// Floats are truncated and numeric strings are accepted, since the service
/// does not always respect the requested types.
fn read_position(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                u as usize
            } else if let Some(f) = n.as_f64().filter(|f| f.is_finite() && *f >= 0.0) {
                f as usize
            } else {
                0
            }
        }
        Some(Value::String(s)) => s.trim().parse::<usize>().unwrap_or(0),
        _ => 0,
    }
}
