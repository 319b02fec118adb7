//! Token extraction from URL query strings.

use url::{Url, form_urlencoded};

/// Name of the query parameter carrying the activation token.
pub const TOKEN_PARAM: &str = "token";

/// Extracts the `token` query parameter from a URL.
///
/// Accepts an absolute URL (`https://host/verify?token=...`), a request target
/// (`/verify?token=...`) or a bare query string (`?token=...` or `token=...`).
///
/// # Rules
///
/// 1. The query is decoded as `application/x-www-form-urlencoded`, so percent
///    escapes are decoded and `+` becomes a space
/// 2. If `token` appears more than once, the first occurrence wins
/// 3. `?token=` yields `Some("")`, which is distinct from `None`
/// 4. Fragments are ignored
///
/// Absence is a normal outcome and is reported as `None`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_token("/?token=abc").as_deref(), Some("abc"));
/// assert_eq!(extract_token("https://app.example.com/verify"), None);
/// ```
pub fn extract_token(current_url: &str) -> Option<String> {
    extract_param(current_url, TOKEN_PARAM)
}

/// Extracts the first value bound to `name` in the query of `current_url`.
pub fn extract_param(current_url: &str, name: &str) -> Option<String> {
    let query = query_component(current_url)?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Returns the raw query component of an absolute URL, request target or bare query.
fn query_component(input: &str) -> Option<String> {
    if let Ok(url) = Url::parse(input) {
        return url.query().map(str::to_string);
    }

    let without_fragment = input.split('#').next().unwrap_or(input);

    match without_fragment.split_once('?') {
        Some((_, query)) => Some(query.to_string()),
        // A request target without '?' has no query
        None if without_fragment.starts_with('/') => None,
        None => Some(without_fragment.to_string()),
    }
}
