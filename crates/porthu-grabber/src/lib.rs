//! XMLTV grabber for the Hungarian port.hu TV guide
//!
//! The listing API provides the schedule; in slow mode every programme's
//! detail page is fetched as well, by a pool of rate-limited workers spread
//! over the provider's addresses.

pub mod assembler;
pub mod categories;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod parser;
pub mod sources;
pub mod utils;
pub mod xmltv;
