//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod content;
pub mod health;
pub mod verify;

pub use content::{next_steps_handler, tourism_options_handler};
pub use health::health_handler;
pub use verify::{verify_body_handler, verify_handler};
