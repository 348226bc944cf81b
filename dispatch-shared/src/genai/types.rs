//! # Generative-AI Type Definitions
//!
//! Provider-neutral request/response types plus the Gemini
//! `generateContent` wire format they map to.

use serde::{Deserialize, Serialize};

/// A single-turn text generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier, e.g. `gemini-3-flash-preview`
    pub model: String,
    /// Persona or task instruction applied before the prompt
    pub system_instruction: Option<String>,
    /// User-supplied text
    pub prompt: String,
}

impl GenerationRequest {
    /// Request for `prompt` on `model` without a system instruction.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            prompt: prompt.into(),
        }
    }

    /// Adds a persona or task instruction.
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Gemini wire body for this request.
    #[must_use]
    pub fn to_wire(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(Some("user"), &self.prompt)],
            system_instruction: self
                .system_instruction
                .as_deref()
                .map(|instruction| Content::text(None, instruction)),
        }
    }
}

/// Generated text, absent when the service produced nothing usable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Text as produced by the service, unmodified
    pub text: Option<String>,
}

impl GenerationResponse {
    /// Response carrying `text`.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Response without text.
    #[must_use]
    pub const fn empty() -> Self {
        Self { text: None }
    }

    /// Text exactly as returned, `None` when absent or empty.
    ///
    /// Whitespace is kept; a reply of only spaces is still a reply.
    #[must_use]
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

impl From<GenerateContentResponse> for GenerationResponse {
    fn from(response: GenerateContentResponse) -> Self {
        Self {
            text: response.text(),
        }
    }
}

/// Body of `POST /models/{model}:generateContent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; always a single user turn here
    pub contents: Vec<Content>,
    /// Persona applied to the whole request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

/// A role-tagged list of parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`; omitted for system instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

/// A content part; only text parts are used here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response of `generateContent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated alternatives, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated alternative
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content, absent when blocked
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped, e.g. `STOP` or `SAFETY`
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; `None` when empty.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_request_shape() {
        let request = GenerationRequest::new("gemini-3-flash-preview", "Where is the library?")
            .with_system_instruction("Be brief.");

        let body = serde_json::to_value(request.to_wire()).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Where is the library?"}]}],
                "systemInstruction": {"parts": [{"text": "Be brief."}]}
            })
        );
    }

    #[test]
    fn test_wire_request_without_instruction_omits_field() {
        let body = serde_json::to_value(GenerationRequest::new("m", "hi").to_wire()).unwrap();
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {"role": "model", "parts": [{"text": "The library "}, {"text": "opens at 8."}]},
                    "finishReason": "STOP"
                },
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"totalTokenCount": 12}
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("The library opens at 8."));
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_response_without_text_is_none() {
        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(blocked.text(), None);

        let empty_parts: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert_eq!(GenerationResponse::from(empty_parts), GenerationResponse::empty());
    }

    #[test]
    fn test_non_empty_text_is_untrimmed() {
        assert_eq!(
            GenerationResponse::from_text("  hi \n").non_empty_text(),
            Some("  hi \n")
        );
        assert_eq!(GenerationResponse::from_text("   ").non_empty_text(), Some("   "));
        assert_eq!(GenerationResponse::from_text("").non_empty_text(), None);
        assert_eq!(GenerationResponse::empty().non_empty_text(), None);
    }
}
