//! Generative model endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

const fn default_timeout_secs() -> u64 {
    120
}

const fn default_analysis_temperature() -> f32 {
    0.1
}

const fn default_scenario_temperature() -> f32 {
    0.3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Empty means degraded mode.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the `generateContent` API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature for compliance analysis. Kept low for consistent findings.
    #[serde(default = "default_analysis_temperature")]
    pub analysis_temperature: f32,

    /// Sampling temperature for scenario modeling.
    #[serde(default = "default_scenario_temperature")]
    pub scenario_temperature: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            analysis_temperature: default_analysis_temperature(),
            scenario_temperature: default_scenario_temperature(),
        }
    }
}

impl GeminiConfig {
    /// Whether an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty endpoint or model, a
    /// zero timeout, or a temperature outside `0.0..=2.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(invalid("gemini.endpoint", "must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("gemini.model", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("gemini.timeout_secs", "must be greater than zero"));
        }
        for (field, value) in [
            ("gemini.analysis_temperature", self.analysis_temperature),
            ("gemini.scenario_temperature", self.scenario_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 2.0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
