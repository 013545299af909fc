/// Configuration default values
///
/// Command-line values override the options stored in the config file; these
/// constants apply when neither is present.
use std::time::Duration;

// Run defaults
pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_MAX_DAYS: i64 = 30;
pub const MAX_DAYS: i64 = 366;
pub const MAX_OFFSET: i64 = 366;
pub const DEFAULT_SLOW: bool = false;

// Detail-page worker defaults
pub const DEFAULT_JOBS: usize = 1;
pub const DEFAULT_RATELIMIT: u32 = 1;
pub const DEFAULT_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_JITTER_PERCENT: u8 = 10;

// Request time budgets
pub const INIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const LISTING_TIMEOUT: Duration = Duration::from_secs(150);
pub const DETAIL_TIMEOUT: Duration = Duration::from_secs(30);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// Config file location
pub const CONFIG_DIR_NAME: &str = ".xmltv";
pub const GRABBER_NAME: &str = "tv_grab_hu_porthu";
