//! # Generative-AI Integration Module
//!
//! This module provides the boundary to the external text-generation
//! service used by the chat widget and the contact form.
//!
//! ## Architecture
//!
//! - [`TextGenerator`] - Async trait implemented by the HTTP client in the
//!   web crate and by fakes in tests
//! - [`GenerationRequest`] / [`GenerationResponse`] - Provider-neutral
//!   request and reply
//! - [`GenerateContentRequest`] / [`GenerateContentResponse`] - Gemini
//!   `generateContent` wire format
//! - [`GenAiError`] - Failure kinds, including missing credentials
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::genai::{GenerationRequest, TextGenerator};
//!
//! let request = GenerationRequest::new("gemini-3-flash-preview", "Where is the library?")
//!     .with_system_instruction("You are a campus assistant.");
//! let reply = client.generate(&request).await?;
//! ```

pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{GenAiError, GenAiResult};
pub use traits::TextGenerator;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationRequest,
    GenerationResponse, Part,
};
