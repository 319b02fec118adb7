//! Application layer services implementing the verification logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::token_service::TokenService`] - Token extraction and verification
//! - [`services::content_service::ContentService`] - Next steps and tourism content

pub mod services;
