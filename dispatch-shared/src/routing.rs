//! View routing.
//!
//! A single current-view selector plus the session flag. Every view is
//! reachable from every other view regardless of session state; there is
//! no terminal state. Scroll reset on navigation is left to the UI layer.

use crate::models::ViewState;
use crate::session::SessionStore;

/// Current view and presumed login status of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    view: ViewState,
    logged_in: bool,
}

impl Router {
    /// Router on the landing view with no session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Router on the landing view, logged in when `store` holds a token.
    ///
    /// The token is trusted as-is; nothing checks its authenticity or age.
    #[must_use]
    pub fn restore<S: SessionStore + ?Sized>(store: &S) -> Self {
        let logged_in = store.token().is_some();
        tracing::debug!(logged_in, "restored session flag");
        Self {
            view: ViewState::Landing,
            logged_in,
        }
    }

    /// View currently displayed.
    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    /// Whether a session is presumed to exist.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Unconditionally switches to `view`.
    pub fn navigate(&mut self, view: ViewState) {
        tracing::debug!(from = %self.view, to = %view, "navigate");
        self.view = view;
    }

    /// Switches to the landing view.
    pub fn go_home(&mut self) {
        self.navigate(ViewState::Landing);
    }

    /// Switches to the contact form.
    pub fn go_contact(&mut self) {
        self.navigate(ViewState::Contact);
    }

    /// Switches to the sign-in screen.
    pub fn go_login(&mut self) {
        self.navigate(ViewState::Login);
    }

    /// Switches to the account creation screen.
    pub fn go_signup(&mut self) {
        self.navigate(ViewState::Signup);
    }

    /// Marks the session as logged in and returns to the landing view.
    ///
    /// The token itself is written by [`crate::session::persist_sign_in`].
    pub fn login_success(&mut self) {
        self.logged_in = true;
        self.go_home();
    }

    /// Clears the stored token, drops the session and returns home.
    pub fn logout<S: SessionStore + ?Sized>(&mut self, store: &mut S) {
        store.clear_token();
        self.logged_in = false;
        self.go_home();
    }
}
