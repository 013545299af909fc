//! HTTP access to the provider
//!
//! Everything that talks to the network goes through [`HttpFetch`], so the
//! listing client and the detail-page workers can be driven by fakes in tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{AppResult, FetchResult};

pub mod endpoint_pool;
pub mod http;
pub mod rate_limit;

pub use endpoint_pool::{EndpointPool, HostResolver, SystemResolver};
#[cfg(test)]
pub use endpoint_pool::MockHostResolver;
pub use http::{PinnedClientFactory, ReqwestFetcher};
pub use rate_limit::{FetchPolicy, RateLimitedFetcher};

/// Status, final URL and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A GET-only HTTP client
///
/// Any completed exchange is `Ok`, whatever its status; `Err` is reserved for
/// timeouts and transport failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> FetchResult<HttpResponse>;
}

/// Builds the client a worker uses for its whole lifetime
#[cfg_attr(test, mockall::automock)]
pub trait ClientFactory: Send + Sync {
    /// Client pinned to `endpoint`, or using regular name resolution for `None`
    fn create(&self, endpoint: Option<SocketAddr>) -> AppResult<Arc<dyn HttpFetch>>;
}
