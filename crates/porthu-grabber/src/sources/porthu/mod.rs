//! port.hu provider
//!
//! The provider exposes a JSON API for the channel catalog and daily
//! listings, and per-programme HTML detail pages.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

pub mod api;
pub mod ids;
pub mod listing;

pub use api::PortHuApi;
pub use ids::{event_to_xmltv, provider_to_xmltv, to_absolute_url, to_raster_image, xmltv_to_provider};
pub use listing::{ListingData, check_expected_channels, extract_channel_data};

pub const HOST: &str = "port.hu";
pub const BASE_URL: &str = "https://port.hu/";
pub const INIT_URL: &str = "https://port.hu/tvapi/init";
pub const LISTING_URL: &str = "https://port.hu/tvapi";

/// Listing days are calendar days in Budapest
pub const PROVIDER_TZ: Tz = chrono_tz::Europe::Budapest;

/// Date format of the listing query parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the provider's time zone
pub fn provider_today() -> NaiveDate {
    Utc::now().with_timezone(&PROVIDER_TZ).date_naive()
}
