//! Grabber configuration
//!
//! The config file is JSON with two sections: `options`, whose values act as
//! defaults for the command line, and `channels`, the channel catalog with the
//! user's per-channel `enabled` flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Channel;

pub mod defaults;
pub mod duration_serde;
pub mod log_level;
pub mod options;
pub mod reconcile;

pub use log_level::{LogLevel, Verbosity};
pub use options::{OptionOverrides, RunOptions};
pub use reconcile::ConfigReconciler;

/// Root of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrabberConfig {
    #[serde(default)]
    pub options: ConfigOptions,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl GrabberConfig {
    /// Channels the user opted into, in config order
    pub fn enabled_channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter().filter(|ch| ch.enabled)
    }
}

/// Stored run options
///
/// Keys this version does not know about are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loglevel: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratelimit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "duration_serde::option_duration"
    )]
    pub max_interval: Option<Duration>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Reads and writes the grabber config file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for `path`, or for the default location when `None`
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(Self::default_path),
        }
    }

    /// `~/.xmltv/tv_grab_hu_porthu.conf`
    pub fn default_path() -> PathBuf {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(defaults::CONFIG_DIR_NAME)
            .join(format!("{}.conf", defaults::GRABBER_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the config file, `ConfigMissing` when it does not exist
    pub fn read(&self) -> AppResult<GrabberConfig> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::ConfigMissing {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        debug!("Reading config file {}", self.path.display());
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the config file, creating its directory when needed
    pub fn write(&self, config: &GrabberConfig) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(config)?;
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        debug!("Writing config file {}", self.path.display());
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
