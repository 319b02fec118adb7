//! Infrastructure layer providing concrete implementations of domain traits.
//!
//! # Modules
//!
//! - [`backend`] - Token backends implementing [`crate::domain::backends::TokenBackend`]

pub mod backend;
