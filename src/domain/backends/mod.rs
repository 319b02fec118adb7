//! Backend trait definitions for the domain layer.
//!
//! A backend is the trust boundary a verifier delegates to. Implementations
//! live in `crate::infrastructure::backend`; mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Backends
//!
//! - [`TokenBackend`] - Accepts or rejects a single token

pub mod token_backend;

pub use token_backend::TokenBackend;

#[cfg(test)]
pub use token_backend::MockTokenBackend;
