//! Retrieval window advertised by the provider and the window of a run

use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use super::Channel;
use crate::config::defaults::DEFAULT_MAX_DAYS;

/// Currently advertised retrieval window and channel catalog
///
/// Offsets are relative to "today" in the provider's time zone. An invalid
/// response does not raise; `valid` is cleared and callers fall back to
/// defaults instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiLimits {
    pub valid: bool,
    pub start_offset: i64,
    pub end_offset: i64,
    pub channels: Vec<Channel>,
}

impl ApiLimits {
    /// Limits used when the init endpoint could not be read
    pub fn invalid() -> Self {
        Self {
            valid: false,
            start_offset: 0,
            end_offset: 0,
            channels: Vec::new(),
        }
    }

    /// Exclusive end of the retrievable day offsets
    pub fn end_day(&self) -> i64 {
        self.end_offset + 1
    }

    pub fn contains_offset(&self, offset: i64) -> bool {
        self.start_offset <= offset && offset <= self.end_offset
    }

    /// Day count to retrieve when the user did not ask for one
    ///
    /// All remaining advertised days when `offset` is inside the window,
    /// otherwise a fixed maximum.
    pub fn default_days(&self, offset: i64) -> i64 {
        if self.valid && self.contains_offset(offset) {
            let advertised = self.end_day() - offset;
            info!("No days specified, retrieving all currently advertised ({advertised})");
            advertised
        } else if self.valid {
            info!(
                "No days specified and offset ({offset}) is outside of the advertised range \
                 ({} - {}), retrieving maximum of {DEFAULT_MAX_DAYS} days",
                self.start_offset, self.end_offset
            );
            DEFAULT_MAX_DAYS
        } else {
            info!("No days specified, retrieving maximum of {DEFAULT_MAX_DAYS} days");
            DEFAULT_MAX_DAYS
        }
    }

    /// Whether `[offset, offset + days)` leaves the advertised window
    pub fn exceeds(&self, offset: i64, days: i64) -> bool {
        self.valid && (offset < self.start_offset || offset + days > self.end_day())
    }
}

/// Requested `[start, start + days)` date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDate,
    pub days: i64,
    pub offset: i64,
}

impl DayWindow {
    /// Window starting `offset` days after `today`
    pub fn from_today(today: NaiveDate, offset: i64, days: i64) -> Self {
        Self {
            start: shift(today, offset),
            days,
            offset,
        }
    }

    /// Exclusive end date
    pub fn end(&self) -> NaiveDate {
        shift(self.start, self.days)
    }

    /// Calendar date of the `index`-th day bucket
    pub fn day(&self, index: usize) -> NaiveDate {
        shift(self.start, index as i64)
    }
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let moved = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    moved.unwrap_or_else(|| {
        warn!("Date {date} shifted by {days} days is out of range, keeping {date}");
        date
    })
}
