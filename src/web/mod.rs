//! Web layer for browser-facing pages.
//!
//! Renders the verification and demo pages with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers and fallbacks
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
