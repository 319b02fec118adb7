//! Utility functions for token handling.
//!
//! - [`token_extractor`] - Token extraction from URL query strings
//! - [`token_format`] - Token format rules and demo token generation

pub mod token_extractor;
pub mod token_format;
