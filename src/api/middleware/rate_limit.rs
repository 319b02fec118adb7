//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::Config;

/// Creates a rate limiter for the verification API.
///
/// # Limits
///
/// - **Replenish**: one request every `RATE_LIMIT_PERIOD_SECONDS`
/// - **Burst**: `RATE_LIMIT_BURST` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with connect info.
///
/// # Errors
///
/// Returns an error if the period or burst size is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api::routes::routes())
///     .layer(rate_limit::layer(&config)?);
/// ```
pub fn layer(
    config: &Config,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_period_seconds)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
