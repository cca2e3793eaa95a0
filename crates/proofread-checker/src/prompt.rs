//! Prompt and request payload construction

use crate::types::{ChatMessage, ChatRequest};

const REVIEW_INSTRUCTIONS: &str = r#"You are a grammar and writing assistant. Analyze the following text and identify grammar errors, spelling mistakes, punctuation issues, and style improvements.
For each issue found, provide:
1. The original problematic text
2. A suggested correction
3. A brief explanation of the issue
4. The approximate position (character index) in the text

Format your response as a JSON array of objects with exactly these keys: "original", "suggestion", "explanation", "position"."#;

/// Build the analysis prompt for `text`
///
/// The text is appended verbatim after a `Text to analyze:` label. Nothing is
/// truncated or escaped; the token budget is enforced by the service.
pub fn build_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(REVIEW_INSTRUCTIONS.len() + text.len() + 24);
    prompt.push_str(REVIEW_INSTRUCTIONS);
    prompt.push_str("\n\n");
    prompt.push_str("Text to analyze:\n");
    prompt.push_str(text);
    prompt
}

/// Build a one-shot request: a single user message, no system prompt, no temperature
pub fn build_request_payload(prompt: &str, model: &str, max_tokens: u32) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        max_tokens,
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = build_prompt("Test text");
        assert!(prompt.starts_with("You are a grammar and writing assistant."));
        for key in ["\"original\"", "\"suggestion\"", "\"explanation\"", "\"position\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_prompt_ends_with_verbatim_text() {
        let text = "  Their  going\r\nto \"the\" park.  ";
        let prompt = build_prompt(text);
        assert!(prompt.ends_with(&format!("Text to analyze:\n{}", text)));
    }

    #[test]
    fn test_prompt_is_not_truncated() {
        let text = "word ".repeat(50_000);
        let prompt = build_prompt(&text);
        assert!(prompt.len() > text.len());
        assert!(prompt.ends_with(&text));
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = build_request_payload("check this", "gpt-4o-mini", 4000);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 4000);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "check this");

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3, "unexpected keys: {:?}", keys);
        assert!(json.get("temperature").is_none());
    }
}
