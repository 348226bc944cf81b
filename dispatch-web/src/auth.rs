//! Simulated account service.
//!
//! The landing site has no backend: both calls wait for the configured
//! latency and succeed.

use crate::util::with_timeout;
use async_trait::async_trait;
use gloo_timers::future::sleep;
use shared::DispatchConfig;
use shared::auth::{AuthError, AuthResult, Authenticator};
use shared::models::{LoginForm, SignupForm};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedAuthenticator {
    latency_ms: u64,
    timeout_ms: u64,
}

impl SimulatedAuthenticator {
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            latency_ms: config.auth_latency_ms,
            timeout_ms: config.request_timeout_ms,
        }
    }

    async fn round_trip(&self) -> AuthResult<()> {
        with_timeout(self.timeout_ms, sleep(Duration::from_millis(self.latency_ms)))
            .await
            .ok_or(AuthError::timeout(self.timeout_ms))
    }
}

#[async_trait(?Send)]
impl Authenticator for SimulatedAuthenticator {
    async fn sign_in(&self, form: &LoginForm) -> AuthResult<()> {
        log::info!("signing in (remember me: {})", form.remember_me);
        self.round_trip().await
    }

    async fn sign_up(&self, form: &SignupForm) -> AuthResult<()> {
        log::info!("creating account for {}", form.name.trim());
        self.round_trip().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reads_latency_and_timeout() {
        let config = DispatchConfig {
            auth_latency_ms: 10,
            request_timeout_ms: 20,
            ..DispatchConfig::default()
        };
        assert_eq!(
            SimulatedAuthenticator::new(&config),
            SimulatedAuthenticator {
                latency_ms: 10,
                timeout_ms: 20,
            }
        );
    }
}
