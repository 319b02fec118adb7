#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use token_verify::domain::backends::TokenBackend;
use token_verify::domain::entities::VerifiedIdentity;
use token_verify::domain::token_error::TokenErrorKind;
use token_verify::infrastructure::backend::FormatCheckBackend;
use token_verify::state::AppState;

pub const VALID_TOKEN: &str = "ABCDEFGHIJ0123456789+/=";
pub const VALID_TOKEN_ENCODED: &str = "ABCDEFGHIJ0123456789%2B%2F%3D";

/// Backend that rejects every token with a fixed kind and reports a fixed health.
pub struct RejectingBackend {
    pub kind: TokenErrorKind,
    pub healthy: bool,
}

#[async_trait]
impl TokenBackend for RejectingBackend {
    async fn check_token(&self, _token: &str) -> Result<VerifiedIdentity, TokenErrorKind> {
        Err(self.kind)
    }

    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(FormatCheckBackend::new()),
        "https://accounts.test/api",
    )
}

pub fn create_rejecting_state(kind: TokenErrorKind, healthy: bool) -> AppState {
    AppState::new(
        Arc::new(RejectingBackend { kind, healthy }),
        "https://accounts.test/api",
    )
}
