//! Session persistence.
//!
//! The session is an inert marker: an opaque token whose presence means
//! "logged in". It is never validated, refreshed or expired.

use std::collections::HashMap;

/// Local storage key of the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Local storage key of the remembered login email.
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";
/// Token written when the student asks to be remembered.
pub const PERSISTENT_TOKEN: &str = "demo-token-xyz-123";
/// Token written for a login without remember-me.
pub const SESSION_TOKEN: &str = "demo-token-session-123";

/// Key-value storage holding the session token and the remembered email.
///
/// Implementations swallow backend failures; a store that cannot be read
/// behaves like an empty one.
pub trait SessionStore {
    /// Raw value under `key`, `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key` as a raw string.
    fn save(&mut self, key: &str, value: &str);
    /// Deletes `key`; absent keys are ignored.
    fn remove(&mut self, key: &str);

    /// Stored session token, if any.
    #[must_use]
    fn token(&self) -> Option<String> {
        self.load(AUTH_TOKEN_KEY)
    }

    /// Stores the session token.
    fn save_token(&mut self, token: &str) {
        self.save(AUTH_TOKEN_KEY, token);
    }

    /// Deletes the session token.
    fn clear_token(&mut self) {
        self.remove(AUTH_TOKEN_KEY);
    }

    /// Email kept from a remember-me login, if any.
    #[must_use]
    fn remembered_email(&self) -> Option<String> {
        self.load(REMEMBERED_EMAIL_KEY)
    }

    /// Keeps `email` for pre-filling the next login.
    fn remember_email(&mut self, email: &str) {
        self.save(REMEMBERED_EMAIL_KEY, email);
    }

    /// Drops the remembered email.
    fn forget_email(&mut self) {
        self.remove(REMEMBERED_EMAIL_KEY);
    }
}

/// Records a successful login.
///
/// With `remember_me` the persistent token is stored and the email kept for
/// the next visit; otherwise the remembered email is dropped and a
/// session-only token is stored.
pub fn persist_sign_in<S: SessionStore + ?Sized>(store: &mut S, email: &str, remember_me: bool) {
    if remember_me {
        store.save_token(PERSISTENT_TOKEN);
        store.remember_email(email);
    } else {
        store.forget_email();
        store.save_token(SESSION_TOKEN);
    }
    tracing::debug!(remember_me, "session token stored");
}

/// In-memory [`SessionStore`], used off-browser and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let mut store = Self::new();
        store.save_token(token);
        store
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_me_keeps_email_and_persistent_token() {
        let mut store = MemorySessionStore::new();
        persist_sign_in(&mut store, "ada@stu.cu.edu.ng", true);

        assert_eq!(store.token().as_deref(), Some(PERSISTENT_TOKEN));
        assert_eq!(store.remembered_email().as_deref(), Some("ada@stu.cu.edu.ng"));
    }

    #[test]
    fn test_session_login_forgets_email() {
        let mut store = MemorySessionStore::new();
        store.remember_email("old@stu.cu.edu.ng");

        persist_sign_in(&mut store, "ada@stu.cu.edu.ng", false);

        assert_eq!(store.token().as_deref(), Some(SESSION_TOKEN));
        assert_eq!(store.remembered_email(), None);
    }

    #[test]
    fn test_clear_token_keeps_remembered_email() {
        let mut store = MemorySessionStore::with_token(PERSISTENT_TOKEN);
        store.remember_email("ada@stu.cu.edu.ng");

        store.clear_token();

        assert_eq!(store.token(), None);
        assert!(store.remembered_email().is_some());
    }

    #[test]
    fn test_keys_match_browser_storage_layout() {
        let store = MemorySessionStore::with_token("t");
        assert_eq!(store.load("authToken").as_deref(), Some("t"));
    }
}
