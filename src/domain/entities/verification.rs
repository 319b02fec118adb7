//! Verification outcome entities.

use serde::Serialize;

use crate::domain::token_error::{TokenErrorKind, TokenValidationError};

/// Identity a backend resolved an accepted token to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedIdentity {
    pub user_id: String,
    pub email: String,
}

impl VerifiedIdentity {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}

/// Successful verification payload: the identity plus the success message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccount {
    pub identity: VerifiedIdentity,
    pub message: String,
}

/// Tagged outcome of a verification attempt.
///
/// Exactly one variant is populated and `message` is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Success {
        user_id: String,
        email: String,
        message: String,
    },
    Failure {
        kind: TokenErrorKind,
        message: String,
    },
}

impl VerificationResult {
    /// Returns true for the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the user-facing message of either variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    /// Returns the failure kind, or `None` on success.
    pub fn error_kind(&self) -> Option<TokenErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Label used for outcome counters and logs.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "SUCCESS",
            Self::Failure { kind, .. } => kind.as_str(),
        }
    }
}

impl From<Result<VerifiedAccount, TokenValidationError>> for VerificationResult {
    fn from(result: Result<VerifiedAccount, TokenValidationError>) -> Self {
        match result {
            Ok(account) => Self::Success {
                user_id: account.identity.user_id,
                email: account.identity.email,
                message: account.message,
            },
            Err(err) => Self::Failure {
                kind: err.kind,
                message: err.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok_builds_success() {
        let account = VerifiedAccount {
            identity: VerifiedIdentity::new("u-1", "u1@example.com"),
            message: "ok".to_string(),
        };

        let result = VerificationResult::from(Ok(account));

        assert!(result.is_success());
        assert_eq!(result.message(), "ok");
        assert_eq!(result.error_kind(), None);
        assert_eq!(result.outcome_label(), "SUCCESS");
    }

    #[test]
    fn test_from_err_builds_failure() {
        let err = TokenValidationError::new(TokenErrorKind::TokenExpired, "expired");

        let result = VerificationResult::from(Err(err));

        assert!(!result.is_success());
        assert_eq!(result.message(), "expired");
        assert_eq!(result.error_kind(), Some(TokenErrorKind::TokenExpired));
        assert_eq!(result.outcome_label(), "TOKEN_EXPIRED");
    }

    #[test]
    fn test_identity_serializes_camel_case() {
        let json = serde_json::to_value(VerifiedIdentity::new("id", "e@x.com")).unwrap();

        assert_eq!(json["userId"], "id");
        assert_eq!(json["email"], "e@x.com");
    }
}
