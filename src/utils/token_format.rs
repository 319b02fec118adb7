//! Activation token format rules and demo token generation.

use base64::Engine as _;
use rand::RngCore;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum length of a well-formed token, in characters.
pub const MIN_TOKEN_LENGTH: usize = 20;

/// Minimum number of random bytes accepted by [`generate_token`].
///
/// 15 bytes encode to exactly [`MIN_TOKEN_LENGTH`] base64 characters.
pub const MIN_TOKEN_BYTES: usize = 15;

/// Default number of random bytes for generated tokens (32 characters).
pub const DEFAULT_TOKEN_BYTES: usize = 24;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+/=]{20,}$").expect("token pattern is a valid regex")
});

/// Returns true if the whole token matches `^[A-Za-z0-9+/=]{20,}$`.
///
/// This is a shape check only and must not be treated as authentication.
pub fn is_well_formed(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// Generates a random token that passes [`is_well_formed`].
///
/// Encodes `bytes` random bytes with the standard base64 alphabet, which is
/// exactly the token alphabet. Values below [`MIN_TOKEN_BYTES`] are raised to
/// it.
pub fn generate_token(bytes: usize) -> String {
    let mut buffer = vec![0u8; bytes.max(MIN_TOKEN_BYTES)];
    rand::rng().fill_bytes(&mut buffer);

    base64::engine::general_purpose::STANDARD.encode(buffer)
}
