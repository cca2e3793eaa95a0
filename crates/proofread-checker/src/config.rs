//! Configuration for the Checker

use proofread_llm::openai::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default output token budget
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Configuration snapshot passed into every check
///
/// Missing keys in a TOML file fall back to the defaults.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Bearer token for the analysis service (empty means not configured)
    pub api_key: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Output token budget sent with every request
    pub max_tokens: u32,

    /// Chat-completions endpoint URL
    pub endpoint: String,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
}

impl CheckerConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether an API key is present
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// API key with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.is_empty() {
            return "(not set)".to_string();
        }
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }

    /// Validate the configuration
    ///
    /// The API key is not checked here; a missing key is reported when a
    /// check is attempted.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for CheckerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerConfig")
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckerConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_api_key());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_max_tokens() {
        let config = CheckerConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_model() {
        let config = CheckerConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = toml::from_str::<CheckerConfig>(r#"api_key = "sk-abc""#).unwrap();
        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CheckerConfig {
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 1500,
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CheckerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = CheckerConfig::default();
        assert_eq!(config.masked_api_key(), "(not set)");

        config.api_key = "abc".to_string();
        assert_eq!(config.masked_api_key(), "***");

        config.api_key = "sk-1234567890".to_string();
        assert_eq!(config.masked_api_key(), "*********7890");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = CheckerConfig {
            api_key: "sk-supersecretvalue".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("alue"));
    }
}
