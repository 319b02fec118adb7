//! Core domain entities for token verification.
//!
//! Entities are immutable values without business logic.
//!
//! # Entity Types
//!
//! - [`VerificationResult`] - Tagged success/failure outcome
//! - [`VerifiedAccount`] - Success payload returned by the verifier
//! - [`VerifiedIdentity`] - Identity a backend resolved a token to
//! - [`NextStep`], [`TourismOption`] - Static content rendered around the result

pub mod content;
pub mod verification;

pub use content::{NextStep, TourismOption};
pub use verification::{VerificationResult, VerifiedAccount, VerifiedIdentity};
