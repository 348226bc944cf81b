//! # Generative-AI Traits
//!
//! This module defines the seam between the shared logic and the
//! text-generation backend.

use crate::genai::{
    errors::GenAiResult,
    types::{GenerationRequest, GenerationResponse},
};
use async_trait::async_trait;

/// A service that turns a prompt into text.
///
/// Futures are not `Send`: the browser implementation runs on the
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait TextGenerator {
    /// Generate text for a single-turn request
    ///
    /// # Errors
    /// Returns [`GenAiError::MissingApiKey`](crate::genai::GenAiError::MissingApiKey)
    /// when no credential is configured, and a transport, status, decode or
    /// timeout error when the call fails.
    async fn generate(&self, request: &GenerationRequest) -> GenAiResult<GenerationResponse>;

    /// Whether a credential is configured.
    fn is_configured(&self) -> bool;
}
