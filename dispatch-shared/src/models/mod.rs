//! # Models
//!
//! Plain data carried between the shared logic and the web client.

pub mod chat;
pub mod contact;
pub mod forms;
pub mod view;

pub use chat::{ChatMessage, ChatRole};
pub use contact::{ContactStatus, Sentiment};
pub use forms::{ContactField, ContactForm, LoginField, LoginForm, SignupField, SignupForm};
pub use view::ViewState;
