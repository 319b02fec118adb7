//! Backend trait for checking activation tokens.

use async_trait::async_trait;

use crate::domain::entities::VerifiedIdentity;
use crate::domain::token_error::TokenErrorKind;

/// Capability that decides whether a token is authentic and who it belongs to.
///
/// The verifier never inspects tokens itself beyond rejecting absent or empty
/// ones; everything else is delegated here, so a remote account service can
/// replace the format-checking stub without touching callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::FormatCheckBackend`] - Local pattern check with a demo identity
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenBackend: Send + Sync {
    /// Checks a non-empty token.
    ///
    /// # Errors
    ///
    /// Returns the [`TokenErrorKind`] describing why the token was rejected.
    /// A remote implementation reports transport failures as
    /// [`TokenErrorKind::NetworkError`] and known-but-stale tokens as
    /// [`TokenErrorKind::TokenExpired`].
    async fn check_token(&self, token: &str) -> Result<VerifiedIdentity, TokenErrorKind>;

    /// Short human-readable name used in logs and health reports.
    fn name(&self) -> &'static str;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health check endpoint.
    async fn health_check(&self) -> bool;
}
