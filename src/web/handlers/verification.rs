//! Verification page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{OriginalUri, State},
    response::IntoResponse,
};

use crate::api::handlers::verify::record_verification;
use crate::application::services::ContentService;
use crate::domain::entities::{NextStep, TourismOption, VerificationResult};
use crate::state::AppState;

/// Template for the verification page.
///
/// Renders `templates/verification.html` with:
/// - Success card with the verified email, or
/// - Error card with the failure message and next steps
/// - Tourism options in both cases
#[derive(Template, WebTemplate)]
#[template(path = "verification.html")]
pub struct VerificationTemplate {
    pub success: bool,
    pub message: String,
    pub email: Option<String>,
    pub error_code: Option<&'static str>,
    pub next_steps: Vec<NextStep>,
    pub tourism_options: Vec<TourismOption>,
}

impl VerificationTemplate {
    /// Builds the page model for a verification outcome.
    ///
    /// Next steps are only listed for failures.
    pub fn new(result: VerificationResult, content: &ContentService) -> Self {
        let tourism_options = content.tourism_options();

        match result {
            VerificationResult::Success { email, message, .. } => Self {
                success: true,
                message,
                email: Some(email),
                error_code: None,
                next_steps: Vec::new(),
                tourism_options,
            },
            VerificationResult::Failure { kind, message } => Self {
                success: false,
                message,
                email: None,
                error_code: Some(kind.as_str()),
                next_steps: content.next_steps(),
                tourism_options,
            },
        }
    }
}

/// Renders the verification page for the token in the current URL.
///
/// # Endpoint
///
/// `GET /?token={token}`
///
/// The page is always served with `200 OK`; the outcome is part of the
/// rendered content.
pub async fn verification_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    let result = state.token_service.verify_url(&uri.to_string()).await;
    record_verification(result.outcome_label());

    VerificationTemplate::new(result, &state.content_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token_error::TokenErrorKind;

    #[test]
    fn test_success_page_model() {
        let result = VerificationResult::Success {
            user_id: "demo-user-id".to_string(),
            email: "demo@turisapp.com".to_string(),
            message: "ok".to_string(),
        };

        let page = VerificationTemplate::new(result, &ContentService::new());

        assert!(page.success);
        assert_eq!(page.email.as_deref(), Some("demo@turisapp.com"));
        assert!(page.next_steps.is_empty());
        assert_eq!(page.tourism_options.len(), 2);
    }

    #[test]
    fn test_failure_page_model() {
        let result = VerificationResult::Failure {
            kind: TokenErrorKind::TokenInvalid,
            message: "invalid".to_string(),
        };

        let page = VerificationTemplate::new(result, &ContentService::new());

        assert!(!page.success);
        assert_eq!(page.error_code, Some("TOKEN_INVALID"));
        assert_eq!(page.next_steps.len(), 3);
    }

    #[test]
    fn test_failure_page_renders_message_and_steps() {
        let result = VerificationResult::Failure {
            kind: TokenErrorKind::TokenNotFound,
            message: "Token no encontrado en la URL".to_string(),
        };

        let html = VerificationTemplate::new(result, &ContentService::new())
            .render()
            .unwrap();

        assert!(html.contains("Token no encontrado en la URL"));
        assert!(html.contains("TOKEN_NOT_FOUND"));
        assert!(html.contains("/register"));
        assert!(html.contains("Cartagena"));
    }
}
