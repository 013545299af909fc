//! Domain models shared by the listing, parsing and output stages

pub mod channel;
pub mod event;
pub mod limits;
pub mod programme;

pub use channel::Channel;
pub use event::{AgeLimit, RawEvent, Restriction};
pub use limits::{ApiLimits, DayWindow};
pub use programme::{Category, Credits, EpisodeNum, Person, Programme, Rating};

/// Root of an XMLTV document: channels first, then programmes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guide {
    pub channels: Vec<Channel>,
    pub programmes: Vec<Programme>,
}

impl Guide {
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.programmes.is_empty()
    }
}
