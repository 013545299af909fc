//! Centralized error handling for the port.hu grabber
//!
//! Errors are split by how far they are allowed to travel:
//!
//! - **Per-item errors** (`DataIntegrity`, `Fetch`): degrade or drop a single
//!   programme, never the run.
//! - **Per-run errors** (`EndpointResolution`, `UpstreamData`): degrade the
//!   run to listing-only output or to default limits.
//! - **Pre-flight errors** (`ConfigMissing`, `Configuration`): stop before any
//!   network traffic and surface as a non-zero exit code.
//!
//! # Usage
//!
//! ```rust
//! use porthu_grabber::errors::{AppError, AppResult};
//!
//! fn require_title(title: Option<&str>) -> AppResult<String> {
//!     title
//!         .map(str::to_string)
//!         .ok_or_else(|| AppError::data_integrity("Every program should have a title"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for detail-page fetch results
pub type FetchResult<T> = Result<T, FetchError>;
