//! Per-worker request pacing with adaptive backoff and bounded retry

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep, sleep_until};
use tracing::{debug, warn};

use super::{HttpFetch, HttpResponse};
use crate::errors::{FetchError, FetchResult};
use crate::utils::jitter::with_jitter;

/// Request policy of one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Minimum spacing of consecutive requests (`interval / ratelimit`)
    pub min_interval: Duration,
    /// Time budget of a single request
    pub timeout: Duration,
    /// Additional attempts after a retriable failure
    pub retries: u32,
    /// Ceiling of the 429 backoff, unbounded when `None`
    pub max_interval: Option<Duration>,
    /// Extra random delay before a retry, in percent of the current interval
    pub jitter_percent: u8,
}

/// HTTP fetcher enforcing a minimum interval between its own requests
///
/// A 429 answer doubles the interval for every later request of this
/// instance. Instances are never shared, so pacing is per worker.
pub struct RateLimitedFetcher {
    http: Arc<dyn HttpFetch>,
    interval: Duration,
    policy: FetchPolicy,
    last_request: Option<Instant>,
}

impl RateLimitedFetcher {
    pub fn new(http: Arc<dyn HttpFetch>, policy: FetchPolicy) -> Self {
        Self {
            http,
            interval: policy.min_interval,
            policy,
            last_request: None,
        }
    }

    /// Currently enforced interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Issue one request, waiting for the interval to elapse first
    ///
    /// Only status 200 is a success: 429 yields `RateLimited` and any other
    /// status yields `Status`.
    pub async fn fetch(&mut self, url: &str) -> FetchResult<HttpResponse> {
        self.wait_turn().await;

        let response = self.http.get(url, &[], self.policy.timeout).await?;
        match response.status {
            200 => Ok(response),
            429 => {
                self.back_off();
                Err(FetchError::RateLimited {
                    url: response.url,
                })
            }
            status => Err(FetchError::Status {
                status,
                url: response.url,
            }),
        }
    }

    /// [`fetch`](Self::fetch) with up to `retries` further attempts on
    /// timeouts and 429s
    pub async fn fetch_with_retry(&mut self, url: &str) -> FetchResult<HttpResponse> {
        let mut attempt = 0;
        loop {
            match self.fetch(url).await {
                Err(e) if e.is_retriable() && attempt < self.policy.retries => {
                    attempt += 1;
                    debug!(
                        "Retrying {url} after {} (attempt {}/{})",
                        e.error_type(),
                        attempt + 1,
                        self.policy.retries + 1
                    );
                    let jitter = with_jitter(self.interval, self.policy.jitter_percent)
                        .saturating_sub(self.interval);
                    if !jitter.is_zero() {
                        sleep(jitter).await;
                    }
                }
                result => return result,
            }
        }
    }

    async fn wait_turn(&mut self) {
        if let Some(last) = self.last_request {
            let next = last + self.interval;
            if Instant::now() < next {
                sleep_until(next).await;
            }
        }
        self.last_request = Some(Instant::now());
    }

    fn back_off(&mut self) {
        let old = self.interval;
        let mut new = old.saturating_mul(2);
        if let Some(cap) = self.policy.max_interval {
            new = new.min(cap.max(old));
        }
        self.interval = new;
        warn!(
            "Rate limited by the provider. Increasing request interval from {} to {}",
            humantime::format_duration(old),
            humantime::format_duration(new)
        );
    }
}
