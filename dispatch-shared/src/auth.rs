//! Sign-in and sign-up seam.
//!
//! There is no account service behind the landing site; the browser build
//! plugs in a simulated implementation. The flows below are shared so the
//! post-success bookkeeping is identical whichever implementation runs.

use crate::models::{LoginForm, SignupForm};
use crate::routing::Router;
use crate::session::{SessionStore, persist_sign_in};
use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for authentication calls
pub type AuthResult<T> = Result<T, AuthError>;

/// Failure of an authentication call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The call did not complete within its bound
    #[error("Authentication timed out after {millis} ms")]
    Timeout {
        /// Bound that was exceeded, in milliseconds
        millis: u64,
    },

    /// The service refused the credentials
    #[error("Authentication rejected: {reason}")]
    Rejected {
        /// Service-supplied explanation
        reason: String,
    },
}

impl AuthError {
    /// Create a new timeout error
    #[must_use]
    pub const fn timeout(millis: u64) -> Self {
        Self::Timeout { millis }
    }

    /// Create a new rejection error
    #[must_use]
    pub fn rejected<T: Into<String>>(reason: T) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Account operations behind the login and signup pages.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Checks credentials from a validated login form.
    ///
    /// # Errors
    /// [`AuthError::Timeout`] when the call exceeds its bound,
    /// [`AuthError::Rejected`] when the credentials are refused.
    async fn sign_in(&self, form: &LoginForm) -> AuthResult<()>;

    /// Registers the account described by a validated signup form.
    ///
    /// # Errors
    /// Same as [`Authenticator::sign_in`].
    async fn sign_up(&self, form: &SignupForm) -> AuthResult<()>;
}

/// Signs in, persists the session and routes home.
///
/// The router and store are untouched on failure.
///
/// # Errors
/// Propagates the authenticator's error.
pub async fn complete_login<A, S>(
    authenticator: &A,
    store: &mut S,
    router: &mut Router,
    form: &LoginForm,
) -> AuthResult<()>
where
    A: Authenticator + ?Sized,
    S: SessionStore + ?Sized,
{
    authenticator.sign_in(form).await?;
    persist_sign_in(store, &form.email, form.remember_me);
    router.login_success();
    tracing::info!(remember_me = form.remember_me, "signed in");
    Ok(())
}

/// Registers the account and routes to the login view.
///
/// # Errors
/// Propagates the authenticator's error.
pub async fn complete_signup<A>(
    authenticator: &A,
    router: &mut Router,
    form: &SignupForm,
) -> AuthResult<()>
where
    A: Authenticator + ?Sized,
{
    authenticator.sign_up(form).await?;
    router.go_login();
    tracing::info!("account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewState;
    use crate::session::{MemorySessionStore, PERSISTENT_TOKEN, SESSION_TOKEN};
    use futures::executor::block_on;

    struct FixedAuthenticator(AuthResult<()>);

    #[async_trait(?Send)]
    impl Authenticator for FixedAuthenticator {
        async fn sign_in(&self, _form: &LoginForm) -> AuthResult<()> {
            self.0.clone()
        }

        async fn sign_up(&self, _form: &SignupForm) -> AuthResult<()> {
            self.0.clone()
        }
    }

    fn login(remember_me: bool) -> LoginForm {
        LoginForm {
            email: "ada@stu.cu.edu.ng".to_string(),
            password: "secret1".to_string(),
            remember_me,
        }
    }

    #[test]
    fn test_login_with_remember_me_persists_token_and_email() {
        let mut store = MemorySessionStore::new();
        let mut router = Router::new();
        router.go_login();

        block_on(complete_login(
            &FixedAuthenticator(Ok(())),
            &mut store,
            &mut router,
            &login(true),
        ))
        .unwrap();

        assert!(router.is_logged_in());
        assert_eq!(router.view(), ViewState::Landing);
        assert_eq!(store.token().as_deref(), Some(PERSISTENT_TOKEN));
        assert_eq!(store.remembered_email().as_deref(), Some("ada@stu.cu.edu.ng"));
    }

    #[test]
    fn test_login_without_remember_me_uses_session_token() {
        let mut store = MemorySessionStore::new();
        store.remember_email("old@stu.cu.edu.ng");
        let mut router = Router::new();

        block_on(complete_login(
            &FixedAuthenticator(Ok(())),
            &mut store,
            &mut router,
            &login(false),
        ))
        .unwrap();

        assert_eq!(store.token().as_deref(), Some(SESSION_TOKEN));
        assert_eq!(store.remembered_email(), None);
    }

    #[test]
    fn test_failed_login_leaves_state_untouched() {
        let mut store = MemorySessionStore::new();
        let mut router = Router::new();
        router.go_login();

        let result = block_on(complete_login(
            &FixedAuthenticator(Err(AuthError::timeout(1500))),
            &mut store,
            &mut router,
            &login(true),
        ));

        assert_eq!(result, Err(AuthError::Timeout { millis: 1500 }));
        assert!(!router.is_logged_in());
        assert_eq!(router.view(), ViewState::Login);
        assert!(store.is_empty());
    }

    #[test]
    fn test_signup_routes_to_login() {
        let mut router = Router::new();
        router.go_signup();

        block_on(complete_signup(
            &FixedAuthenticator(Ok(())),
            &mut router,
            &SignupForm::default(),
        ))
        .unwrap();

        assert_eq!(router.view(), ViewState::Login);
        assert!(!router.is_logged_in());
    }

    #[test]
    fn test_rejected_signup_stays_put() {
        let mut router = Router::new();
        router.go_signup();

        let result = block_on(complete_signup(
            &FixedAuthenticator(Err(AuthError::rejected("taken"))),
            &mut router,
            &SignupForm::default(),
        ));

        assert_eq!(result.unwrap_err().to_string(), "Authentication rejected: taken");
        assert_eq!(router.view(), ViewState::Signup);
    }
}
