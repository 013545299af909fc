//! Spreading detail-page workers over the provider's addresses

use std::net::SocketAddr;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Name resolution seam
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup(&self, host: &str) -> std::io::Result<Vec<SocketAddr>>;
}

/// Resolver backed by the system resolver, HTTPS port
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> std::io::Result<Vec<SocketAddr>> {
        Ok(tokio::net::lookup_host((host, 443)).await?.collect())
    }
}

/// Addresses of one host, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPool {
    addrs: Vec<SocketAddr>,
}

impl EndpointPool {
    /// Resolve `host`; zero addresses is an `EndpointResolution` error
    pub async fn resolve(resolver: &dyn HostResolver, host: &str) -> AppResult<Self> {
        let addrs = resolver
            .lookup(host)
            .await
            .map_err(|e| AppError::endpoint_resolution(host, e.to_string()))?;
        Self::from_addrs(host, addrs)
    }

    /// Pool of the given addresses, IPv4 only when any IPv4 address exists
    pub fn from_addrs(host: &str, addrs: Vec<SocketAddr>) -> AppResult<Self> {
        let mut unique: Vec<SocketAddr> = Vec::with_capacity(addrs.len());
        for addr in addrs {
            if !unique.contains(&addr) {
                unique.push(addr);
            }
        }
        if unique.iter().any(SocketAddr::is_ipv4) {
            unique.retain(SocketAddr::is_ipv4);
        }

        if unique.is_empty() {
            return Err(AppError::endpoint_resolution(
                host,
                "No IP address returned.",
            ));
        }

        debug!("Resolved {host} to {} endpoint(s): {unique:?}", unique.len());
        Ok(Self { addrs: unique })
    }

    /// One address per worker, round-robin when workers outnumber addresses
    pub fn assign(&self, jobs: usize) -> Vec<SocketAddr> {
        if self.addrs.len() < jobs {
            warn!(
                "Available endpoints are less than the requested jobs ({} < {jobs}). \
                 Only do that if you know what you are doing",
                self.addrs.len()
            );
        }
        (0..jobs)
            .map(|i| self.addrs[i % self.addrs.len()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_robin_assignment() {
        let pool = EndpointPool::from_addrs(
            "port.hu",
            vec![addr("10.0.0.1:443"), addr("10.0.0.2:443")],
        )
        .unwrap();

        assert_eq!(
            pool.assign(3),
            vec![addr("10.0.0.1:443"), addr("10.0.0.2:443"), addr("10.0.0.1:443")]
        );
        assert_eq!(pool.assign(1), vec![addr("10.0.0.1:443")]);
    }

    #[test]
    fn test_prefers_ipv4_and_dedupes() {
        let pool = EndpointPool::from_addrs(
            "port.hu",
            vec![
                addr("[2001:db8::1]:443"),
                addr("10.0.0.1:443"),
                addr("10.0.0.1:443"),
            ],
        )
        .unwrap();
        assert_eq!(pool.assign(2), vec![addr("10.0.0.1:443"), addr("10.0.0.1:443")]);

        let v6_only =
            EndpointPool::from_addrs("port.hu", vec![addr("[2001:db8::1]:443")]).unwrap();
        assert_eq!(v6_only.assign(1), vec![addr("[2001:db8::1]:443")]);
    }

    #[tokio::test]
    async fn test_zero_addresses_is_resolution_error() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().returning(|_| Ok(Vec::new()));

        let err = EndpointPool::resolve(&resolver, "port.hu").await.unwrap_err();
        assert!(matches!(err, AppError::EndpointResolution { ref host, .. } if host == "port.hu"));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_resolution_error() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .returning(|_| Err(std::io::Error::other("no such host")));

        assert!(EndpointPool::resolve(&resolver, "port.hu").await.is_err());
    }
}
