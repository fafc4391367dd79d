// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event hub configuration
//!
//! Controls how a hub identifies itself in logs and which diagnostics it emits.
//! Loaded from TOML, e.g.
//!
//! ```toml
//! label = "toolbar"
//! warn_on_mismatched_args = true
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a hub configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse hub config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid hub config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HubConfig {
    /// Name attached to every log record the hub emits
    pub label: String,
    /// Log a warning when a trigger passes a payload kind that does not
    /// match the event type's conventional kind. Dispatch is unaffected.
    pub warn_on_mismatched_args: bool,
}

impl HubConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_mismatch_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_mismatched_args = enabled;
        self
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: HubConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::Invalid("label must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            label: "ui".to_string(),
            warn_on_mismatched_args: false,
        }
    }
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;
