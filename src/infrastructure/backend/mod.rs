//! Token backends implementing [`crate::domain::backends::TokenBackend`].
//!
//! - [`FormatCheckBackend`] - Local stand-in that accepts well-formed tokens
//!   and resolves them to a fixed demo identity

mod format_check;

pub use format_check::{DEMO_EMAIL, DEMO_USER_ID, FormatCheckBackend};
