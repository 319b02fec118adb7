//! Domain layer containing verification entities and the backend contract.
//!
//! This module is independent of the HTTP and rendering layers. It defines the
//! values a verification produces and the capability a verifier delegates the
//! trust decision to.
//!
//! # Architecture
//!
//! - [`entities`] - Verification outcomes, identities and static display records
//! - [`backends`] - The [`backends::TokenBackend`] trait implemented by infrastructure
//! - [`token_error`] - Error taxonomy for failed verifications
//!
//! # Verification Flow
//!
//! 1. The HTTP layer hands the request URL to [`crate::utils::token_extractor::extract_token`]
//! 2. [`crate::application::services::TokenService`] rejects absent or empty tokens
//! 3. The configured [`backends::TokenBackend`] accepts or rejects the token
//! 4. The outcome is returned as [`entities::VerificationResult`]

pub mod backends;
pub mod entities;
pub mod token_error;
