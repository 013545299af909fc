//! Raw schedule entries as returned by the listing API

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One provider-side schedule entry
///
/// Only the fields the grabber consumes are modelled; everything else in the
/// listing JSON is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEvent {
    /// Event id, e.g. `event-tv-1159526715-194`
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub episode_title: Option<String>,
    #[serde(default)]
    pub film_url: Option<String>,
    #[serde(default)]
    pub is_repeat: Option<bool>,
    #[serde(default)]
    pub restriction: Option<Restriction>,
}

impl RawEvent {
    /// Detail-page URL used to group events, empty strings count as absent
    pub fn detail_url(&self) -> Option<&str> {
        self.film_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn is_repeat(&self) -> bool {
        self.is_repeat.unwrap_or(false)
    }
}

/// Age restriction attached to a schedule entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Restriction {
    #[serde(default)]
    pub age_limit: Option<AgeLimit>,
    #[serde(default, rename = "ageLimitImage")]
    pub age_limit_image: Option<String>,
}

/// Age limit value, numeric in practice but tolerated as text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AgeLimit {
    Number(i64),
    Text(String),
}

impl fmt::Display for AgeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
