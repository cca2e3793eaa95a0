//! Configuration management for the CLI.
//!
//! Values are resolved in layers: defaults, then the TOML config file, then
//! environment variables (a `.env` file in the working directory is loaded
//! into the environment first), then command-line flags.

use crate::error::{CliError, Result};
use proofread_checker::CheckerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable holding the model identifier
pub const ENV_MODEL: &str = "OPENAI_MODEL";
/// Environment variable holding the output token budget
pub const ENV_MAX_TOKENS: &str = "MAX_TOKENS";
/// Environment variable holding the endpoint URL
pub const ENV_ENDPOINT: &str = "OPENAI_ENDPOINT";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analysis service settings
    #[serde(default)]
    pub checker: CheckerConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".proofread").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default path.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_default(path, Self::default_path())
    }

    /// Resolve the file to write or show: `path` if given, else the default path.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    fn load_with_default(path: Option<&Path>, default_path: Result<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match default_path {
                Ok(path) if path.exists() => Self::from_file(&path),
                Ok(_) => Ok(Self::default()),
                Err(e) => {
                    debug!("No default config location ({}), using defaults", e);
                    Ok(Self::default())
                }
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Override checker settings from environment variables.
    ///
    /// `lookup` is `std::env::var(..).ok()` in production.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.checker.api_key = key.trim().to_string();
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            self.checker.model = model.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_MAX_TOKENS) {
            self.checker.max_tokens = raw.trim().parse().map_err(|_| {
                CliError::Config(format!("{} must be a positive integer, got '{}'", ENV_MAX_TOKENS, raw))
            })?;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.trim().is_empty()) {
            self.checker.endpoint = endpoint.trim().to_string();
        }
        Ok(())
    }

    /// Apply command-line overrides and validate the result.
    pub fn apply_overrides(&mut self, model: Option<String>, max_tokens: Option<u32>) -> Result<()> {
        if let Some(model) = model {
            self.checker.model = model;
        }
        if let Some(max_tokens) = max_tokens {
            self.checker.max_tokens = max_tokens;
        }
        self.checker.validate().map_err(CliError::Config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
