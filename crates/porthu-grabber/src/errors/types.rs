//! Error type definitions for the port.hu grabber

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A listing entry violates a mandatory-field invariant
    #[error("Data integrity error: {message}")]
    DataIntegrity { message: String },

    /// The provider host resolved to zero addresses
    #[error("Failed to resolve '{host}': {message}")]
    EndpointResolution { host: String, message: String },

    /// Detail-page or API request failures
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Unexpected status or malformed JSON from the provider API
    #[error("Upstream data error: {endpoint} - {message}")]
    UpstreamData { endpoint: String, message: String },

    /// No persisted configuration present
    #[error("Config file not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    /// Invalid configuration or command-line values
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failures of a single HTTP request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The per-request time budget elapsed
    #[error("Request timed out after {timeout:?}: {url}")]
    Timeout { url: String, timeout: Duration },

    /// The provider answered 429 Too Many Requests
    #[error("Rate limited by provider: {url}")]
    RateLimited { url: String },

    /// Any other non-200 status
    #[error("Response code indicating failure: {status}. Url: {url}")]
    Status { status: u16, url: String },

    /// Connection, TLS or body read failures
    #[error("Transport error: {url} - {message}")]
    Transport { url: String, message: String },
}

impl AppError {
    /// Create a data integrity error
    pub fn data_integrity<S: Into<String>>(message: S) -> Self {
        Self::DataIntegrity {
            message: message.into(),
        }
    }

    /// Create an endpoint resolution error
    pub fn endpoint_resolution<H: Into<String>, M: Into<String>>(host: H, message: M) -> Self {
        Self::EndpointResolution {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Create an upstream data error
    pub fn upstream_data<E: Into<String>, M: Into<String>>(endpoint: E, message: M) -> Self {
        Self::UpstreamData {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Whether the same request may succeed if issued again later
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::RateLimited { .. })
    }

    /// Short, stable name used in log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::RateLimited { .. } => "rate_limited",
            Self::Status { .. } => "status",
            Self::Transport { .. } => "transport",
        }
    }

    /// The URL the failed request was issued against
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url, .. }
            | Self::RateLimited { url }
            | Self::Status { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }
}
