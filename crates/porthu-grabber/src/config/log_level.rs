//! Log level setting shared by the CLI and the config file
//!
//! The config file stores levels numerically (10 = DEBUG ... 50 = FATAL) for
//! compatibility with existing XMLTV grabber configs; names are accepted too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumString};
use tracing_subscriber::filter::LevelFilter;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    #[strum(to_string = "WARNING", serialize = "WARN")]
    Warning,
    Error,
    #[strum(to_string = "FATAL", serialize = "CRITICAL")]
    Fatal,
}

impl LogLevel {
    pub fn numeric(self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
            Self::Fatal => 50,
        }
    }

    /// Nearest level for a numeric value, rounding towards more verbose output
    pub fn from_numeric(value: u64) -> Self {
        match value {
            0..=10 => Self::Debug,
            11..=20 => Self::Info,
            21..=30 => Self::Warning,
            31..=40 => Self::Error,
            _ => Self::Fatal,
        }
    }

    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Fatal => LevelFilter::ERROR,
        }
    }
}

/// Parse either a level name or its numeric value
pub fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    let value = value.trim();
    if let Ok(numeric) = value.parse::<u64>() {
        return Ok(LogLevel::from_numeric(numeric));
    }
    LogLevel::from_str(value).map_err(|_| {
        format!("Invalid log level '{value}'. Expected FATAL, ERROR, WARNING, INFO, DEBUG or a number")
    })
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.numeric())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(LogLevel::from_numeric(n)),
            Raw::Name(name) => parse_log_level(&name).map_err(serde::de::Error::custom),
        }
    }
}

/// Effective verbosity after applying the shortcut flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Level(LogLevel),
}

impl Verbosity {
    /// `quiet` wins over `debug`, which wins over `verbose`, which wins over `level`
    pub fn resolve(quiet: bool, debug: bool, verbose: bool, level: LogLevel) -> Self {
        if quiet {
            Self::Quiet
        } else if debug {
            Self::Level(LogLevel::Debug)
        } else if verbose {
            Self::Level(LogLevel::Info)
        } else {
            Self::Level(level)
        }
    }

    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::OFF,
            Self::Level(level) => level.as_level_filter(),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => f.write_str("off"),
            Self::Level(level) => write!(f, "{}", level.as_level_filter()),
        }
    }
}
