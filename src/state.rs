use std::sync::Arc;

use crate::application::services::{ContentService, TokenService};
use crate::domain::backends::TokenBackend;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub content_service: Arc<ContentService>,
    /// Base URL of the account API. Not called by the format-check backend.
    pub api_base_url: String,
}

impl AppState {
    pub fn new(backend: Arc<dyn TokenBackend>, api_base_url: impl Into<String>) -> Self {
        Self {
            token_service: Arc::new(TokenService::new(backend)),
            content_service: Arc::new(ContentService::new()),
            api_base_url: api_base_url.into(),
        }
    }
}
