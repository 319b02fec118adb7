//! Error taxonomy for token verification.

use serde::Serialize;
use std::fmt;

/// Reason a token could not be verified.
///
/// Serialized with the wire names `TOKEN_NOT_FOUND`, `TOKEN_EXPIRED`,
/// `TOKEN_INVALID` and `NETWORK_ERROR`.
///
/// The format-checking backend only produces [`TokenErrorKind::TokenNotFound`]
/// (via the service) and [`TokenErrorKind::TokenInvalid`]. `TokenExpired` and
/// `NetworkError` are reserved for a backend that talks to a remote account
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenErrorKind {
    TokenNotFound,
    TokenExpired,
    TokenInvalid,
    NetworkError,
}

impl TokenErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenErrorKind; 4] = [
        Self::TokenNotFound,
        Self::TokenExpired,
        Self::TokenInvalid,
        Self::NetworkError,
    ];

    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::NetworkError => "NETWORK_ERROR",
        }
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed verification: the kind of failure plus the user-facing message.
///
/// Every expected failure is an ordinary value of this type; the verifier
/// never panics for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TokenValidationError {
    #[serde(rename = "type")]
    pub kind: TokenErrorKind,
    pub message: String,
}

impl TokenValidationError {
    pub fn new(kind: TokenErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
