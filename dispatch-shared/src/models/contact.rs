//! Contact form status and ticket sentiment.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::Display;

/// Lifecycle of a contact form submission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    /// Nothing in flight; the form is editable.
    #[default]
    Idle,
    /// Validation and classification are running.
    Submitting,
    /// The ticket was delivered.
    Success,
    /// The ticket was rejected or could not be classified.
    Error,
}

impl ContactStatus {
    /// Whether the submit control should be disabled.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// One-word sentiment of a support ticket as classified by the text model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sentiment {
    /// Satisfied or appreciative.
    Positive,
    /// Purely informational.
    Neutral,
    /// Frustrated or complaining.
    Negative,
    /// The model answered with something other than the three labels.
    Unknown,
}

impl FromStr for Sentiment {
    type Err = std::convert::Infallible;

    /// Lenient parse of a model reply: case-insensitive, surrounding
    /// punctuation ignored, anything unrecognised maps to [`Sentiment::Unknown`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let word = value
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_ascii_lowercase();
        Ok(match word.as_str() {
            "positive" => Self::Positive,
            "neutral" => Self::Neutral,
            "negative" => Self::Negative,
            _ => Self::Unknown,
        })
    }
}
