//! Configuration system for affirm.
//!
//! Load message rendering limits and the failure handler chain from TOML
//! or YAML files so test suites can tune diagnostics without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use affirm_config::{AffirmConfig, HandlerKind};
//!
//! let config = AffirmConfig::from_toml_str(r#"
//!     [messages]
//!     max_line_length = 100
//!     collection_display_limit = 5
//!
//!     [failure]
//!     handlers = ["log", "raise"]
//! "#).unwrap();
//!
//! assert_eq!(config.messages.max_line_length, 100);
//! assert_eq!(config.messages.excess_preview_limit, 3);
//! assert_eq!(config.failure.handlers, vec![HandlerKind::Log, HandlerKind::Raise]);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use affirm_config::AffirmConfig;
//!
//! let config = AffirmConfig::load("affirm.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the `  Expected: ` / `  But was:  ` prefixes.
pub const PREFIX_WIDTH: usize = 12;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main affirm configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AffirmConfig {
    /// Failure message rendering.
    #[serde(default)]
    pub messages: MessageConfig,

    /// What happens to a failed assertion.
    #[serde(default)]
    pub failure: FailureConfig,
}

impl AffirmConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the maximum rendered line length.
    pub fn with_max_line_length(mut self, length: usize) -> Self {
        self.messages.max_line_length = length;
        self
    }

    /// Disables clipping of long strings in diffs.
    pub fn without_string_clipping(mut self) -> Self {
        self.messages.clip_strings = false;
        self
    }

    /// Appends a handler to the failure chain.
    pub fn with_handler(mut self, handler: HandlerKind) -> Self {
        self.failure.handlers.push(handler);
        self
    }

    /// Replaces the failure chain.
    pub fn with_handlers(mut self, handlers: impl IntoIterator<Item = HandlerKind>) -> Self {
        self.failure.handlers = handlers.into_iter().collect();
        self
    }

    /// Checks limits and handler order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a limit is zero, the line length
    /// cannot fit a prefix plus a clipped value, or a handler follows a
    /// terminal handler and could never run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.messages.validate()?;
        self.failure.validate()
    }
}

/// Failure message rendering limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct MessageConfig {
    /// Longest line a string diff may occupy.
    pub max_line_length: usize,

    /// Whether long strings are clipped around the first mismatch.
    pub clip_strings: bool,

    /// Items shown when a collection is written as a value.
    pub collection_display_limit: usize,

    /// Items shown in `Missing:` / `Extra:` previews.
    pub excess_preview_limit: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            max_line_length: 78,
            clip_strings: true,
            collection_display_limit: 10,
            excess_preview_limit: 3,
        }
    }
}

impl MessageConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        // prefix + two quotes + two ellipses + one visible character
        let minimum = PREFIX_WIDTH + 2 + 6 + 1;
        if self.max_line_length < minimum {
            return Err(ConfigError::Invalid(format!(
                "max_line_length must be at least {}, got {}",
                minimum, self.max_line_length
            )));
        }
        if self.collection_display_limit == 0 {
            return Err(ConfigError::Invalid(
                "collection_display_limit must be positive".to_string(),
            ));
        }
        if self.excess_preview_limit == 0 {
            return Err(ConfigError::Invalid(
                "excess_preview_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Failure handler chain layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct FailureConfig {
    /// Handlers consulted in order for every failed assertion.
    pub handlers: Vec<HandlerKind>,

    /// Level used by the `log` handler.
    pub log_level: LogLevel,
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self {
            handlers: vec![HandlerKind::Raise],
            log_level: LogLevel::Error,
        }
    }
}

impl FailureConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(position) = self.handlers.iter().position(HandlerKind::is_terminal) {
            if let Some(unreachable) = self.handlers.get(position + 1) {
                return Err(ConfigError::Invalid(format!(
                    "handler {:?} follows terminal handler {:?} and never runs",
                    unreachable, self.handlers[position]
                )));
            }
        }
        Ok(())
    }
}

/// A failure handler in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Emit a tracing event, then pass the failure on.
    Log,

    /// Record the failure and continue the test.
    Collect,

    /// Fail the assertion with the rendered message.
    Raise,
}

impl HandlerKind {
    /// Returns true if this handler never delegates to a successor.
    pub fn is_terminal(&self) -> bool {
        matches!(self, HandlerKind::Collect | HandlerKind::Raise)
    }
}

/// Level of the events emitted by the `log` handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
}

#[cfg(test)]
mod tests;
