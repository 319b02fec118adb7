//! # Token Verify
//!
//! Account activation token verification for TurisApp Colombia, built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as the rest of our services:
//!
//! - **Domain Layer** ([`domain`]) - Verification entities, error taxonomy and the backend trait
//! - **Application Layer** ([`application`]) - Token verification and static content services
//! - **Infrastructure Layer** ([`infrastructure`]) - Token backend implementations
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML verification and demo pages
//!
//! ## Features
//!
//! - Token extraction from the request URL (first occurrence wins, percent-decoded)
//! - Pluggable [`domain::backends::TokenBackend`] with a local format-check stub
//! - Typed failures: `TOKEN_NOT_FOUND`, `TOKEN_INVALID`, `TOKEN_EXPIRED`, `NETWORK_ERROR`
//! - Per-IP rate limiting and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: simulate backend latency
//! export VERIFY_DELAY_MS=300
//!
//! # Start the service
//! cargo run
//!
//! # Generate a well-formed token and a link to verify it
//! cargo run --bin admin -- token generate
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContentService, TokenService, VerificationMessages};
    pub use crate::domain::backends::TokenBackend;
    pub use crate::domain::entities::{VerificationResult, VerifiedAccount, VerifiedIdentity};
    pub use crate::domain::token_error::{TokenErrorKind, TokenValidationError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::backend::FormatCheckBackend;
    pub use crate::state::AppState;
    pub use crate::utils::token_extractor::extract_token;
}
