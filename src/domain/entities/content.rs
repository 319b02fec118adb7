//! Static display records shown next to verification results.

use serde::Serialize;

/// A suggested action shown when verification fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    /// Font Awesome icon class, e.g. `fa-link`.
    pub icon: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

/// A promoted tourism destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourismOption {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// CSS hex color, e.g. `#f59e0b`.
    pub color: &'static str,
}
