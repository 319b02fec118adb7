//! Format-checking token backend.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::domain::backends::TokenBackend;
use crate::domain::entities::VerifiedIdentity;
use crate::domain::token_error::TokenErrorKind;
use crate::utils::token_format::is_well_formed;

/// User ID returned for every accepted token.
pub const DEMO_USER_ID: &str = "demo-user-id";

/// Email returned for every accepted token.
pub const DEMO_EMAIL: &str = "demo@turisapp.com";

/// A backend that simulates the account service locally.
///
/// Accepts any token matching `^[A-Za-z0-9+/=]{20,}$` and resolves it to the
/// demo identity. Tokens are never consumed, so verifying the same token twice
/// succeeds twice.
///
/// # Use Cases
///
/// - Development and demos without an account service
/// - Testing the presentation layer end to end
///
/// An optional delay simulates network latency before answering.
#[derive(Debug, Clone, Default)]
pub struct FormatCheckBackend {
    delay: Duration,
}

impl FormatCheckBackend {
    /// Creates a backend that answers immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that waits `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TokenBackend for FormatCheckBackend {
    async fn check_token(&self, token: &str) -> Result<VerifiedIdentity, TokenErrorKind> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if is_well_formed(token) {
            Ok(VerifiedIdentity::new(DEMO_USER_ID, DEMO_EMAIL))
        } else {
            debug!(token_len = token.len(), "Token rejected by format check");
            Err(TokenErrorKind::TokenInvalid)
        }
    }

    fn name(&self) -> &'static str {
        "format-check"
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_well_formed_token() {
        let backend = FormatCheckBackend::new();

        let identity = backend
            .check_token("ABCDEFGHIJ0123456789+/=")
            .await
            .unwrap();

        assert_eq!(identity.user_id, DEMO_USER_ID);
        assert_eq!(identity.email, DEMO_EMAIL);
    }

    #[tokio::test]
    async fn test_rejects_short_token() {
        let backend = FormatCheckBackend::new();

        let result = backend.check_token("abc123").await;

        assert_eq!(result, Err(TokenErrorKind::TokenInvalid));
    }

    #[tokio::test]
    async fn test_rejects_bad_characters() {
        let backend = FormatCheckBackend::new();

        let result = backend.check_token("has a space in it!!").await;

        assert_eq!(result, Err(TokenErrorKind::TokenInvalid));
    }

    #[tokio::test]
    async fn test_is_idempotent() {
        let backend = FormatCheckBackend::new();
        let token = "ABCDEFGHIJ0123456789+/=";

        let first = backend.check_token(token).await;
        let second = backend.check_token(token).await;

        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_applied() {
        let backend = FormatCheckBackend::with_delay(Duration::from_millis(500));
        let started = tokio::time::Instant::now();

        let result = backend.check_token("ABCDEFGHIJ0123456789+/=").await;

        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(FormatCheckBackend::new().health_check().await);
    }
}
