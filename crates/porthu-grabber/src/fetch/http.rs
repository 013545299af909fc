//! reqwest-backed [`HttpFetch`]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{ClientFactory, HttpFetch, HttpResponse};
use crate::config::defaults::CONNECT_TIMEOUT;
use crate::errors::{AppResult, FetchError, FetchResult};

/// HTTP client with a connection timeout only; the per-request budget is
/// passed with every call
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Client using regular name resolution
    pub fn new() -> AppResult<Self> {
        let client = Self::builder().build()?;
        Ok(Self { client })
    }

    /// Client that connects to `addr` for every request to `host`
    ///
    /// TLS server name and the Host header still carry `host`.
    pub fn pinned(host: &str, addr: SocketAddr) -> AppResult<Self> {
        debug!("Creating HTTP client for {host} pinned to {addr}");
        let client = Self::builder().resolve(host, addr).build()?;
        Ok(Self { client })
    }

    fn builder() -> reqwest::ClientBuilder {
        Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
    }
}

fn classify(err: reqwest::Error, url: &str, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            timeout,
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> FetchResult<HttpResponse> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, url, timeout))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, url, timeout))?;

        debug!("Fetched {} bytes from {final_url} (status {status})", body.len());
        Ok(HttpResponse {
            status,
            url: final_url,
            body,
        })
    }
}

/// Creates [`ReqwestFetcher`]s pinned to the endpoints of one host
#[derive(Debug, Clone)]
pub struct PinnedClientFactory {
    host: String,
}

impl PinnedClientFactory {
    pub fn new<H: Into<String>>(host: H) -> Self {
        Self { host: host.into() }
    }
}

impl ClientFactory for PinnedClientFactory {
    fn create(&self, endpoint: Option<SocketAddr>) -> AppResult<Arc<dyn HttpFetch>> {
        let fetcher = match endpoint {
            Some(addr) => ReqwestFetcher::pinned(&self.host, addr)?,
            None => ReqwestFetcher::new()?,
        };
        Ok(Arc::new(fetcher))
    }
}
