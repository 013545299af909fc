//! Layering of command-line values over stored options over defaults

use std::path::PathBuf;
use std::time::Duration;

use super::ConfigOptions;
use super::defaults::*;
use crate::errors::{AppError, AppResult};
use crate::fetch::FetchPolicy;

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    pub output: Option<PathBuf>,
    pub days: Option<i64>,
    pub offset: Option<i64>,
    pub slow: bool,
    pub jobs: Option<usize>,
    pub ratelimit: Option<u32>,
    pub interval: Option<u64>,
    pub retries: Option<u32>,
    pub max_interval: Option<Duration>,
}

/// Fully resolved options of one grabber run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub output: Option<PathBuf>,
    /// `None` lets the provider's advertised window decide
    pub days: Option<i64>,
    pub offset: i64,
    pub slow: bool,
    pub jobs: usize,
    pub ratelimit: u32,
    pub interval: Duration,
    pub retries: u32,
    pub max_interval: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: None,
            days: None,
            offset: DEFAULT_OFFSET,
            slow: DEFAULT_SLOW,
            jobs: DEFAULT_JOBS,
            ratelimit: DEFAULT_RATELIMIT,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            retries: DEFAULT_RETRIES,
            max_interval: None,
        }
    }
}

impl RunOptions {
    /// Resolve options: command line, then stored options, then defaults
    pub fn resolve(cli: &OptionOverrides, stored: &ConfigOptions) -> AppResult<Self> {
        let options = Self {
            output: cli.output.clone().or_else(|| stored.output.clone()),
            days: cli.days.or(stored.days),
            offset: cli.offset.or(stored.offset).unwrap_or(DEFAULT_OFFSET),
            slow: cli.slow || stored.slow.unwrap_or(DEFAULT_SLOW),
            jobs: cli.jobs.or(stored.jobs).unwrap_or(DEFAULT_JOBS),
            ratelimit: cli.ratelimit.or(stored.ratelimit).unwrap_or(DEFAULT_RATELIMIT),
            interval: Duration::from_secs(
                cli.interval
                    .or(stored.interval)
                    .unwrap_or(DEFAULT_INTERVAL_SECS),
            ),
            retries: cli.retries.or(stored.retries).unwrap_or(DEFAULT_RETRIES),
            max_interval: cli.max_interval.or(stored.max_interval),
        };
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> AppResult<()> {
        if self.jobs == 0 {
            return Err(AppError::configuration("--jobs must be at least 1"));
        }
        if self.ratelimit == 0 {
            return Err(AppError::configuration("--ratelimit must be at least 1"));
        }
        if self.interval.is_zero() {
            return Err(AppError::configuration("--interval must be at least 1 second"));
        }
        if let Some(days) = self.days {
            if !(1..=MAX_DAYS).contains(&days) {
                return Err(AppError::configuration(format!(
                    "--days must be between 1 and {MAX_DAYS} (got {days})"
                )));
            }
        }
        if !(-MAX_OFFSET..=MAX_OFFSET).contains(&self.offset) {
            return Err(AppError::configuration(format!(
                "--offset must be between -{MAX_OFFSET} and {MAX_OFFSET} (got {})",
                self.offset
            )));
        }
        Ok(())
    }

    /// Detail-page request policy of a single worker
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            min_interval: self.interval / self.ratelimit,
            timeout: DETAIL_TIMEOUT,
            retries: self.retries,
            max_interval: self.max_interval,
            jitter_percent: DEFAULT_RETRY_JITTER_PERCENT,
        }
    }

    /// Options worth persisting through `--save-options`
    pub fn to_stored(&self, base: &ConfigOptions) -> ConfigOptions {
        ConfigOptions {
            output: self.output.clone(),
            days: self.days,
            offset: Some(self.offset),
            slow: Some(self.slow),
            jobs: Some(self.jobs),
            ratelimit: Some(self.ratelimit),
            interval: Some(self.interval.as_secs()),
            retries: Some(self.retries),
            max_interval: self.max_interval,
            ..base.clone()
        }
    }
}
