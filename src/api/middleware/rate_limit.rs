//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates the service-wide rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Limits are
/// applied per client IP address extracted from the socket peer address, so
/// the server must be set up with connect info (see `server::run`).
///
/// # Arguments
///
/// - `per_second` - Sustained request rate replenished per second
/// - `burst` - Bucket size absorbing short bursts above the sustained rate
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{short_id}", get(redirect_handler))
///     .layer(rate_limit::layer(2, 100));
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
