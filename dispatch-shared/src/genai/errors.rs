//! # Generative-AI Error Types
//!
//! This module defines error types for text-generation calls.

use thiserror::Error;

/// Result type alias for text-generation operations
pub type GenAiResult<T> = Result<T, GenAiError>;

/// Error type for calls to the text-generation service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenAiError {
    /// No API key is configured
    #[error("API key missing")]
    MissingApiKey,

    /// The request never produced an HTTP response
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying failure description
        message: String,
    },

    /// The service answered with a non-success status
    #[error("Service returned status {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body could not be decoded
    #[error("Invalid response body: {details}")]
    Decode {
        /// Decoder message
        details: String,
    },

    /// Operation timeout
    #[error("Operation timed out after {millis} ms")]
    Timeout {
        /// Elapsed budget in milliseconds
        millis: u64,
    },
}

impl GenAiError {
    /// Create a new transport error
    #[must_use]
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new status error
    #[must_use]
    pub fn status<T: Into<String>>(code: u16, body: T) -> Self {
        Self::Status {
            code,
            body: body.into(),
        }
    }

    /// Create a new decode error
    #[must_use]
    pub fn decode<T: Into<String>>(details: T) -> Self {
        Self::Decode {
            details: details.into(),
        }
    }

    /// Create a new timeout error
    #[must_use]
    pub const fn timeout(millis: u64) -> Self {
        Self::Timeout { millis }
    }

    /// `true` for the configuration failure, which is reported to the user
    /// differently from connectivity problems.
    #[must_use]
    pub const fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

impl From<serde_json::Error> for GenAiError {
    fn from(error: serde_json::Error) -> Self {
        Self::decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            GenAiError::transport("dns"),
            GenAiError::Transport {
                message: "dns".to_string()
            }
        );
        assert_eq!(
            GenAiError::status(429, "quota").to_string(),
            "Service returned status 429: quota"
        );
        assert_eq!(
            GenAiError::timeout(15_000).to_string(),
            "Operation timed out after 15000 ms"
        );
    }

    #[test]
    fn test_only_missing_key_is_a_credentials_error() {
        assert!(GenAiError::MissingApiKey.is_missing_credentials());
        assert!(!GenAiError::transport("offline").is_missing_credentials());
        assert!(!GenAiError::status(401, "bad key").is_missing_credentials());
    }

    #[test]
    fn test_from_serde_json_error() {
        let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(GenAiError::from(error), GenAiError::Decode { .. }));
    }
}
