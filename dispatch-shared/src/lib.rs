#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::multiple_crate_versions)]

//! Target-independent logic for the CU Dispatch web client: view routing,
//! form validation, session persistence and the AI campus assistant.

pub mod assistant;
pub mod auth;
pub mod config;
pub mod genai;
pub mod models;
pub mod routing;
pub mod session;
pub mod support;
pub mod validation;

pub use config::{ConfigError, DispatchConfig};
pub use routing::Router;
pub use session::{MemorySessionStore, SessionStore};
