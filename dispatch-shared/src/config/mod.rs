//! # Configuration
//!
//! Runtime settings of the web client. Every field has a default, so an
//! empty JSON object or an empty environment yields a working (offline)
//! configuration; the chat assistant simply reports the missing key.

use crate::validation::DEFAULT_INSTITUTION_DOMAIN;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default Gemini REST base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable could not be parsed
    #[error("Invalid {name} value '{value}': must be a non-negative integer")]
    InvalidNumber {
        /// Variable name
        name: String,
        /// Rejected value
        value: String,
    },

    /// A setting holds a value the client cannot run with
    #[error("Invalid setting {field}: {reason}")]
    InvalidValue {
        /// Offending field of [`DispatchConfig`]
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    fn invalid_number(name: &str, value: &str) -> Self {
        Self::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Settings of the CU Dispatch web client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Gemini API key; `None` disables the assistant and ticket classification
    pub api_key: Option<String>,

    /// Gemini model used for chat and classification
    pub model: String,

    /// Base URL of the Gemini REST API
    pub endpoint: String,

    /// Bound on every Gemini request
    pub request_timeout_ms: u64,

    /// Simulated sign-in/sign-up latency
    pub auth_latency_ms: u64,

    /// Simulated contact ticket delivery delay
    pub contact_delivery_ms: u64,

    /// How long the contact success banner stays before the form goes idle
    pub status_reset_ms: u64,

    /// Domain every signup email must belong to
    pub institution_domain: String,

    /// Console log level
    pub log_level: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: 15_000,
            auth_latency_ms: 1_500,
            contact_delivery_ms: 1_500,
            status_reset_ms: 3_000,
            institution_domain: DEFAULT_INSTITUTION_DOMAIN.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DispatchConfig {
    /// Applies `DISPATCH_*` variables from `lookup` on top of `self`.
    ///
    /// The key is also read from the legacy `GEMINI_API_KEY` and `API_KEY`
    /// names, with `DISPATCH_API_KEY` taking precedence. Blank values are
    /// ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidNumber`] for a duration that is not an
    /// unsigned integer.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(key) = ["DISPATCH_API_KEY", "GEMINI_API_KEY", "API_KEY"]
            .into_iter()
            .find_map(&var)
        {
            self.api_key = Some(key);
        }
        if let Some(model) = var("DISPATCH_MODEL") {
            self.model = model;
        }
        if let Some(endpoint) = var("DISPATCH_ENDPOINT") {
            self.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(domain) = var("DISPATCH_INSTITUTION_DOMAIN") {
            self.institution_domain = domain;
        }
        if let Some(level) = var("DISPATCH_LOG_LEVEL") {
            self.log_level = level;
        }

        for (name, slot) in [
            ("DISPATCH_REQUEST_TIMEOUT_MS", &mut self.request_timeout_ms),
            ("DISPATCH_AUTH_LATENCY_MS", &mut self.auth_latency_ms),
            ("DISPATCH_CONTACT_DELIVERY_MS", &mut self.contact_delivery_ms),
            ("DISPATCH_STATUS_RESET_MS", &mut self.status_reset_ms),
        ] {
            if let Some(value) = var(name) {
                *slot = parse_millis(name, &value)?;
            }
        }

        Ok(self)
    }

    /// Checks that the client can run with these settings.
    ///
    /// # Errors
    /// Every problem found, in field order.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.model.trim().is_empty() {
            errors.push(ConfigError::invalid_value("model", "must not be empty"));
        }
        if self.endpoint.trim().is_empty() {
            errors.push(ConfigError::invalid_value("endpoint", "must not be empty"));
        }
        if self.request_timeout_ms == 0 {
            errors.push(ConfigError::invalid_value(
                "request_timeout_ms",
                "must be greater than 0",
            ));
        }
        if self.institution_domain.trim().is_empty() {
            errors.push(ConfigError::invalid_value(
                "institution_domain",
                "must not be empty",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Whether a non-blank API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

fn parse_millis(name: &str, value: &str) -> Result<u64, ConfigError> {
    u64::from_str(value).map_err(|_| ConfigError::invalid_number(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DispatchConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout_ms, 15_000);
        assert_eq!(config.auth_latency_ms, 1_500);
        assert_eq!(config.contact_delivery_ms, 1_500);
        assert_eq!(config.status_reset_ms, 3_000);
        assert_eq!(config.institution_domain, "stu.cu.edu.ng");
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: DispatchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DispatchConfig::default());

        let partial: DispatchConfig =
            serde_json::from_str(r#"{"api_key": "k", "status_reset_ms": 10}"#).unwrap();
        assert!(partial.has_api_key());
        assert_eq!(partial.status_reset_ms, 10);
        assert_eq!(partial.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_overrides_apply() {
        let config = DispatchConfig::default()
            .with_overrides(env(&[
                ("DISPATCH_API_KEY", "secret"),
                ("DISPATCH_MODEL", "gemini-2.5-flash"),
                ("DISPATCH_ENDPOINT", "http://localhost:9000/v1/"),
                ("DISPATCH_REQUEST_TIMEOUT_MS", "2500"),
                ("DISPATCH_INSTITUTION_DOMAIN", "example.edu"),
                ("DISPATCH_LOG_LEVEL", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.endpoint, "http://localhost:9000/v1");
        assert_eq!(config.request_timeout_ms, 2_500);
        assert_eq!(config.institution_domain, "example.edu");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_legacy_key_names() {
        let gemini = DispatchConfig::default()
            .with_overrides(env(&[("GEMINI_API_KEY", "g"), ("API_KEY", "a")]))
            .unwrap();
        assert_eq!(gemini.api_key.as_deref(), Some("g"));

        let plain = DispatchConfig::default()
            .with_overrides(env(&[("API_KEY", "a")]))
            .unwrap();
        assert_eq!(plain.api_key.as_deref(), Some("a"));

        let preferred = DispatchConfig::default()
            .with_overrides(env(&[("DISPATCH_API_KEY", "d"), ("API_KEY", "a")]))
            .unwrap();
        assert_eq!(preferred.api_key.as_deref(), Some("d"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = DispatchConfig::default()
            .with_overrides(env(&[
                ("DISPATCH_API_KEY", "  "),
                ("DISPATCH_MODEL", ""),
                ("DISPATCH_AUTH_LATENCY_MS", " "),
            ]))
            .unwrap();
        assert_eq!(config, DispatchConfig::default());
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let error = DispatchConfig::default()
            .with_overrides(env(&[("DISPATCH_STATUS_RESET_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidNumber {
                name: "DISPATCH_STATUS_RESET_MS".to_string(),
                value: "soon".to_string(),
            }
        );
        assert!(error.to_string().contains("DISPATCH_STATUS_RESET_MS"));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let config = DispatchConfig {
            model: String::new(),
            endpoint: " ".to_string(),
            request_timeout_ms: 0,
            institution_domain: String::new(),
            ..DispatchConfig::default()
        };
        let errors = config.validate().unwrap_err();
        let fields: Vec<_> = errors
            .iter()
            .map(|error| match error {
                ConfigError::InvalidValue { field, .. } => *field,
                ConfigError::InvalidNumber { .. } => "number",
            })
            .collect();
        assert_eq!(
            fields,
            vec!["model", "endpoint", "request_timeout_ms", "institution_domain"]
        );
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = DispatchConfig {
            api_key: Some(String::new()),
            ..DispatchConfig::default()
        };
        assert!(!config.has_api_key());
    }
}
