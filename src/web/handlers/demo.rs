//! Demo page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use url::form_urlencoded;

use crate::state::AppState;
use crate::utils::token_extractor::TOKEN_PARAM;
use crate::utils::token_format::{DEFAULT_TOKEN_BYTES, generate_token};

/// A sample link on the demo page.
pub struct DemoLink {
    pub label: &'static str,
    pub expected: &'static str,
    pub href: String,
}

/// Template for the demo page.
///
/// Renders `templates/demo.html` with one sample link per outcome.
#[derive(Template, WebTemplate)]
#[template(path = "demo.html")]
pub struct DemoTemplate {
    pub links: Vec<DemoLink>,
    pub api_base_url: String,
}

/// Builds a verification page link carrying `token`.
pub fn verification_link(token: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(TOKEN_PARAM, token)
        .finish();

    format!("/?{query}")
}

/// Sample links covering every outcome the format-check backend produces.
///
/// The well-formed token is freshly generated on each call.
pub fn demo_links() -> Vec<DemoLink> {
    vec![
        DemoLink {
            label: "Token válido",
            expected: "SUCCESS",
            href: verification_link(&generate_token(DEFAULT_TOKEN_BYTES)),
        },
        DemoLink {
            label: "Token demasiado corto",
            expected: "TOKEN_INVALID",
            href: verification_link("abc123"),
        },
        DemoLink {
            label: "Token con caracteres no permitidos",
            expected: "TOKEN_INVALID",
            href: verification_link("has a space in it!!"),
        },
        DemoLink {
            label: "Token vacío",
            expected: "TOKEN_NOT_FOUND",
            href: verification_link(""),
        },
        DemoLink {
            label: "Sin token",
            expected: "TOKEN_NOT_FOUND",
            href: "/".to_string(),
        },
    ]
}

/// Renders the demo page.
///
/// # Endpoint
///
/// `GET /demo`
pub async fn demo_handler(State(state): State<AppState>) -> impl IntoResponse {
    DemoTemplate {
        links: demo_links(),
        api_base_url: state.api_base_url.clone(),
    }
}
