//! Business logic services for the application layer.

pub mod content_service;
pub mod token_service;

pub use content_service::ContentService;
pub use token_service::{TokenService, VerificationMessages};
