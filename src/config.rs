//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `API_BASE_URL` - Account API endpoint (default: `https://app-turismo.onrender.com/api`)
//! - `VERIFY_DELAY_MS` - Simulated backend latency (default: 0, max: 10000)
//! - `RATE_LIMIT_PERIOD_SECONDS` - Seconds to replenish one API request (default: 1)
//! - `RATE_LIMIT_BURST` - API requests allowed in a burst (default: 30)
//!
//! No variable is required.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Default account API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://app-turismo.onrender.com/api";

/// Upper bound for `VERIFY_DELAY_MS`.
const MAX_VERIFY_DELAY_MS: u64 = 10_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the account API a real backend would call.
    pub api_base_url: String,
    /// Artificial latency applied by the format-check backend.
    pub verify_delay_ms: u64,
    pub rate_limit_period_seconds: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            verify_delay_ms: 0,
            rate_limit_period_seconds: 1,
            rate_limit_burst: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let api_base_url = env::var("API_BASE_URL").unwrap_or(defaults.api_base_url);

        let verify_delay_ms =
            parse_var("VERIFY_DELAY_MS")?.unwrap_or(defaults.verify_delay_ms);

        let rate_limit_period_seconds = parse_var("RATE_LIMIT_PERIOD_SECONDS")?
            .unwrap_or(defaults.rate_limit_period_seconds);

        let rate_limit_burst = parse_var("RATE_LIMIT_BURST")?.unwrap_or(defaults.rate_limit_burst);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            api_base_url,
            verify_delay_ms,
            rate_limit_period_seconds,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `api_base_url` is not an absolute http(s) URL
    /// - `verify_delay_ms` exceeds 10000
    /// - rate limit settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let api_url = Url::parse(&self.api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", self.api_base_url))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            );
        }

        if self.verify_delay_ms > MAX_VERIFY_DELAY_MS {
            anyhow::bail!(
                "VERIFY_DELAY_MS is too large (max: {}), got {}",
                MAX_VERIFY_DELAY_MS,
                self.verify_delay_ms
            );
        }

        if self.rate_limit_period_seconds == 0 {
            anyhow::bail!("RATE_LIMIT_PERIOD_SECONDS must be greater than 0");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        Ok(())
    }

    /// Simulated backend latency.
    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Account API: {}", self.api_base_url);
        tracing::info!("  Verify delay: {}ms", self.verify_delay_ms);
        tracing::info!(
            "  Rate limit: 1 request / {}s, burst {}",
            self.rate_limit_period_seconds,
            self.rate_limit_burst
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "API_BASE_URL",
        "VERIFY_DELAY_MS",
        "RATE_LIMIT_PERIOD_SECONDS",
        "RATE_LIMIT_BURST",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());

        config.api_base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "ftp://files.example.com".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "http://localhost:4000/api".to_string();
        assert!(config.validate().is_ok());

        config.verify_delay_ms = 10_001;
        assert!(config.validate().is_err());

        config.verify_delay_ms = 250;
        assert!(config.validate().is_ok());

        config.rate_limit_period_seconds = 0;
        assert!(config.validate().is_err());

        config.rate_limit_period_seconds = 2;
        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_verify_delay() {
        let config = Config {
            verify_delay_ms: 1500,
            ..Config::default()
        };

        assert_eq!(config.verify_delay(), Duration::from_millis(1500));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.verify_delay_ms, 0);
        assert_eq!(config.rate_limit_burst, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("API_BASE_URL", "https://accounts.example.com/api");
            env::set_var("VERIFY_DELAY_MS", "800");
            env::set_var("RATE_LIMIT_BURST", "5");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.api_base_url, "https://accounts.example.com/api");
        assert_eq!(config.verify_delay_ms, 800);
        assert_eq!(config.rate_limit_burst, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("VERIFY_DELAY_MS", "soon");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("VERIFY_DELAY_MS"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_validates() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
