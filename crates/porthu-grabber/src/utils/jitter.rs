//! Jitter for retry delays
//!
//! Spreads retries of parallel workers so they do not hit the provider in
//! lock-step after a shared failure.

use std::time::Duration;

use rand::Rng;

/// Random jitter between 0 and `max_jitter_ms` milliseconds (inclusive)
///
/// # Examples
/// ```
/// use porthu_grabber::utils::jitter::generate_jitter_ms;
///
/// let jitter = generate_jitter_ms(100);
/// assert!(jitter <= 100);
/// ```
pub fn generate_jitter_ms(max_jitter_ms: u64) -> u64 {
    if max_jitter_ms == 0 {
        return 0;
    }
    rand::rng().random_range(0..=max_jitter_ms)
}

/// `base` extended by up to `jitter_percent` percent of itself
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use porthu_grabber::utils::jitter::with_jitter;
///
/// let delay = with_jitter(Duration::from_millis(1000), 25);
/// assert!(delay >= Duration::from_millis(1000));
/// assert!(delay <= Duration::from_millis(1250));
/// ```
pub fn with_jitter(base: Duration, jitter_percent: u8) -> Duration {
    let base_ms = u64::try_from(base.as_millis()).unwrap_or(u64::MAX);
    if jitter_percent == 0 || base_ms == 0 {
        return base;
    }
    let max_jitter = base_ms.saturating_mul(u64::from(jitter_percent)) / 100;
    base + Duration::from_millis(generate_jitter_ms(max_jitter))
}
