//! HTML template rendering handlers.

mod demo;
mod fallback;
mod verification;

pub use demo::{DemoLink, DemoTemplate, demo_handler, demo_links, verification_link};
pub use fallback::{FALLBACK_HTML, fallback_on_panic, redirect_home};
pub use verification::{VerificationTemplate, verification_handler};
