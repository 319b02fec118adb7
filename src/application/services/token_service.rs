//! Token verification service.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::backends::TokenBackend;
use crate::domain::entities::{VerificationResult, VerifiedAccount};
use crate::domain::token_error::{TokenErrorKind, TokenValidationError};
use crate::utils::token_extractor::extract_token;

/// User-facing messages keyed by verification outcome.
///
/// Every message must be non-empty; [`VerificationMessages::default`] holds
/// the Spanish catalogue shown by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationMessages {
    pub success: String,
    pub token_not_found: String,
    pub token_expired: String,
    pub token_invalid: String,
    pub network_error: String,
}

impl VerificationMessages {
    /// Returns the message for a failure kind.
    pub fn for_kind(&self, kind: TokenErrorKind) -> &str {
        match kind {
            TokenErrorKind::TokenNotFound => &self.token_not_found,
            TokenErrorKind::TokenExpired => &self.token_expired,
            TokenErrorKind::TokenInvalid => &self.token_invalid,
            TokenErrorKind::NetworkError => &self.network_error,
        }
    }

    /// Builds the error value for a failure kind.
    pub fn error(&self, kind: TokenErrorKind) -> TokenValidationError {
        TokenValidationError::new(kind, self.for_kind(kind))
    }
}

impl Default for VerificationMessages {
    fn default() -> Self {
        Self {
            success: "¡Tu cuenta ha sido verificada exitosamente! Ya puedes acceder a todas las \
                      funcionalidades de TurisApp Colombia."
                .to_string(),
            token_not_found: "Token no encontrado en la URL".to_string(),
            token_expired: "El token de verificación ha expirado. Solicita un nuevo enlace \
                            registrándote nuevamente."
                .to_string(),
            token_invalid: "El token de verificación no es válido o ha expirado".to_string(),
            network_error: "No fue posible contactar el servidor de verificación. Inténtalo de \
                            nuevo en unos minutos."
                .to_string(),
        }
    }
}

/// Service verifying account activation tokens.
///
/// Rejects absent and empty tokens itself and delegates every other decision
/// to the injected [`TokenBackend`]. Holds no mutable state: dropping a
/// pending verification has no side effects, and nothing is retried.
pub struct TokenService {
    backend: Arc<dyn TokenBackend>,
    messages: VerificationMessages,
}

impl TokenService {
    /// Creates a verification service with the default message catalogue.
    pub fn new(backend: Arc<dyn TokenBackend>) -> Self {
        Self::with_messages(backend, VerificationMessages::default())
    }

    /// Creates a verification service with a custom message catalogue.
    pub fn with_messages(backend: Arc<dyn TokenBackend>, messages: VerificationMessages) -> Self {
        Self { backend, messages }
    }

    /// Returns the message catalogue used for results.
    pub fn messages(&self) -> &VerificationMessages {
        &self.messages
    }

    /// Returns the name of the configured backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Checks if the configured backend is healthy.
    pub async fn backend_healthy(&self) -> bool {
        self.backend.health_check().await
    }

    /// Verifies a token.
    ///
    /// # Flow
    ///
    /// 1. `None` or `""` fails with `TOKEN_NOT_FOUND` without consulting the backend
    /// 2. The backend accepts the token and resolves it to an identity, or rejects it
    /// 3. The success message or the message for the rejection kind is attached
    ///
    /// # Errors
    ///
    /// Returns [`TokenValidationError`] with:
    /// - `TOKEN_NOT_FOUND` if the token is absent or empty
    /// - whatever kind the backend rejected the token with otherwise
    pub async fn verify(
        &self,
        token: Option<&str>,
    ) -> Result<VerifiedAccount, TokenValidationError> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => {
                debug!("No token supplied");
                return Err(self.messages.error(TokenErrorKind::TokenNotFound));
            }
        };

        match self.backend.check_token(token).await {
            Ok(identity) => {
                info!(
                    backend = self.backend.name(),
                    user_id = %identity.user_id,
                    "Token verified"
                );
                Ok(VerifiedAccount {
                    identity,
                    message: self.messages.success.clone(),
                })
            }
            Err(kind) => {
                info!(
                    backend = self.backend.name(),
                    kind = %kind,
                    token_len = token.len(),
                    "Token rejected"
                );
                Err(self.messages.error(kind))
            }
        }
    }

    /// Verifies a token and returns the tagged outcome.
    pub async fn verify_result(&self, token: Option<&str>) -> VerificationResult {
        self.verify(token).await.into()
    }

    /// Extracts the `token` parameter from `current_url` and verifies it.
    ///
    /// See [`extract_token`] for the accepted URL shapes.
    pub async fn verify_url(&self, current_url: &str) -> VerificationResult {
        let token = extract_token(current_url);
        self.verify_result(token.as_deref()).await
    }
}
