//! Normalized programme records handed to the XMLTV writer

use chrono::{DateTime, FixedOffset};

/// Final programme record
#[derive(Debug, Clone, PartialEq)]
pub struct Programme {
    pub start: DateTime<FixedOffset>,
    pub stop: Option<DateTime<FixedOffset>>,
    pub channel: String,
    pub title: String,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub credits: Option<Credits>,
    /// Release date or year as published by the provider
    pub date: Option<String>,
    pub categories: Vec<Category>,
    /// Runtime in minutes
    pub length: Option<String>,
    pub urls: Vec<String>,
    pub episode_num: Option<EpisodeNum>,
    pub previously_shown: bool,
    pub ratings: Vec<Rating>,
}

impl Programme {
    /// Programme carrying only the mandatory fields
    pub fn new<C: Into<String>, T: Into<String>>(
        start: DateTime<FixedOffset>,
        channel: C,
        title: T,
    ) -> Self {
        Self {
            start,
            stop: None,
            channel: channel.into(),
            title: title.into(),
            sub_title: None,
            description: None,
            credits: None,
            date: None,
            categories: Vec::new(),
            length: None,
            urls: Vec::new(),
            episode_num: None,
            previously_shown: false,
            ratings: Vec::new(),
        }
    }
}

/// Cast and crew, in XMLTV element order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credits {
    pub directors: Vec<Person>,
    pub actors: Vec<Person>,
    pub producers: Vec<Person>,
    pub composers: Vec<Person>,
}

impl Credits {
    pub fn is_empty(&self) -> bool {
        self.directors.is_empty()
            && self.actors.is_empty()
            && self.producers.is_empty()
            && self.composers.is_empty()
    }
}

/// A credited person with an optional profile URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub url: Option<String>,
}

/// A category label in a given language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub lang: String,
}

impl Category {
    pub fn new<N: Into<String>, L: Into<String>>(name: N, lang: L) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One-based season and episode numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeNum {
    season: Option<u32>,
    episode: Option<u32>,
}

impl EpisodeNum {
    /// Build a numbering when at least one part is known
    pub fn new(season: Option<u32>, episode: Option<u32>) -> Option<Self> {
        let season = season.filter(|n| *n > 0);
        let episode = episode.filter(|n| *n > 0);
        if season.is_none() && episode.is_none() {
            return None;
        }
        Some(Self { season, episode })
    }

    /// Zero-based `season.episode.part/total` form of the `xmltv_ns` system
    pub fn xmltv_ns(&self) -> String {
        let zero_based = |n: Option<u32>| {
            n.and_then(|n| n.checked_sub(1))
                .map(|n| n.to_string())
                .unwrap_or_default()
        };
        format!(
            "{}.{}.0/1",
            zero_based(self.season),
            zero_based(self.episode)
        )
    }
}

/// Content rating with an optional icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub value: String,
    pub icon: Option<String>,
}
