//! The campus assistant behind the floating chat widget.
//!
//! A stateless request/response loop: every question is sent on its own
//! with the fixed persona; the transcript is only what the widget shows.

use crate::genai::{GenAiError, GenAiResult, GenerationRequest, GenerationResponse, TextGenerator};
use crate::models::ChatMessage;

/// First transcript entry.
pub const GREETING: &str = "Hi! I am your CU Information Pal. Ask me anything about campus life!";
/// Appended when the service answers without text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm having a little trouble thinking right now. Try again?";
/// Appended when the request fails.
pub const CONNECTION_APOLOGY: &str = "Oops! I lost my connection. Please try asking again.";
/// Appended when no API key is configured.
pub const MISSING_KEY_NOTICE: &str = "Error: API Key missing. Please configure the environment.";

/// Persona instruction sent with every question.
pub const PERSONA: &str = "You are a helpful student assistant bot for Covenant University called 'CU Dispatch Bot'. \
You are friendly, concise, and use student-friendly language (sometimes slightly informal but respectful). \
You know about: Lecture timetables, Exam schedules, Chapel service times, Cafeteria locations, and Library resources. \
If asked about something specific like \"Where is the library\", give a plausible specific answer relevant to a university campus.";

/// Transcript and in-flight flag of the chat widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
            pending: false,
        }
    }
}

impl ChatSession {
    /// Transcript holding only the greeting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript in display order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the student's question and marks a reply as pending.
    ///
    /// Returns the prompt to send, or `None` when `input` is blank or a
    /// reply is already pending; the transcript is unchanged in that case.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.pending = true;
        Some(input.to_string())
    }

    /// Appends the assistant's side for the outcome of the pending request.
    pub fn finish(&mut self, outcome: GenAiResult<GenerationResponse>) {
        self.messages.push(ChatMessage::model(reply_text(outcome)));
        self.pending = false;
    }
}

/// Text shown to the student for a generation outcome.
///
/// A successful reply is shown verbatim; only an absent or empty text
/// falls back to [`EMPTY_REPLY_FALLBACK`].
#[must_use]
pub fn reply_text(outcome: GenAiResult<GenerationResponse>) -> String {
    match outcome {
        Ok(response) => response
            .non_empty_text()
            .map_or_else(|| EMPTY_REPLY_FALLBACK.to_string(), str::to_string),
        Err(GenAiError::MissingApiKey) => MISSING_KEY_NOTICE.to_string(),
        Err(error) => {
            tracing::warn!(%error, "chat request failed");
            CONNECTION_APOLOGY.to_string()
        }
    }
}

/// Builds the request for a student question.
#[must_use]
pub fn question_request(model: &str, prompt: &str) -> GenerationRequest {
    GenerationRequest::new(model, prompt).with_system_instruction(PERSONA)
}

/// Sends `prompt` with the persona and returns the raw outcome.
///
/// # Errors
/// Propagates the generator's error; [`reply_text`] turns it into the
/// student-facing message.
pub async fn ask<G: TextGenerator + ?Sized>(
    generator: &G,
    model: &str,
    prompt: &str,
) -> GenAiResult<GenerationResponse> {
    if !generator.is_configured() {
        return Err(GenAiError::MissingApiKey);
    }
    generator.generate(&question_request(model, prompt)).await
}
