//! Fixed-interval request gate.
//!
//! Wraps a `governor` limiter with a burst of one, so consecutive calls to
//! [`RequestGate::ready`] are at least one period apart. The first call passes
//! immediately. A zero period disables the gate.

use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

/// Spaces out requests from one pagination loop.
pub struct RequestGate {
    limiter: Option<DefaultDirectRateLimiter>,
    period: Duration,
}

impl RequestGate {
    /// Allow one request per `period`.
    #[must_use]
    pub fn fixed_interval(period: Duration) -> Self {
        let limiter = Quota::with_period(period).map(RateLimiter::direct);
        Self { limiter, period }
    }

    /// Wait until the next request may go out.
    pub async fn ready(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

impl std::fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGate").field("period", &self.period).finish()
    }
}
