//! DTOs for the token verification endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{VerifiedAccount, VerifiedIdentity};

/// Request body for `POST /api/verify`.
///
/// A missing or `null` token is reported as `TOKEN_NOT_FOUND`, not as a
/// malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: Option<String>,
}

/// Successful verification response.
///
/// ```json
/// {
///   "success": true,
///   "message": "¡Tu cuenta ha sido verificada exitosamente! ...",
///   "data": { "userId": "demo-user-id", "email": "demo@turisapp.com" }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub data: VerifiedIdentity,
}

impl From<VerifiedAccount> for VerifyResponse {
    fn from(account: VerifiedAccount) -> Self {
        Self {
            success: true,
            message: account.message,
            data: account.identity,
        }
    }
}
