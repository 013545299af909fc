//! Extraction of channels and events from a listing response
//!
//! The listing endpoint answers with one bucket per requested day, in date
//! order. Buckets do not follow calendar-day boundaries exactly, so an event
//! is kept only in the bucket of its own start date.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, warn};

use super::ids::provider_to_xmltv;
use super::LISTING_URL;
use crate::errors::{AppError, AppResult};
use crate::models::{Channel, DayWindow, RawEvent};

/// Channels and events of a listing response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingData {
    /// Union of the channels of all days, first-seen order
    pub channels: Vec<Channel>,
    pub events: Vec<RawEvent>,
}

/// Walk the day buckets of `response`, bucket `k` belonging to `start + k`
///
/// `expected_ids` are the requested provider channel ids; deviations from
/// them are logged per day.
pub fn extract_channel_data(
    response: &Value,
    expected_ids: &[String],
    start: NaiveDate,
) -> AppResult<ListingData> {
    let Some(buckets) = response.as_object() else {
        return Err(AppError::upstream_data(
            LISTING_URL,
            "Listing response is not an object of days",
        ));
    };

    let window = DayWindow {
        start,
        days: buckets.len() as i64,
        offset: 0,
    };
    let mut data = ListingData::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, bucket) in buckets.values().enumerate() {
        let day = window.day(index);
        let mut day_channels: Vec<String> = Vec::new();

        let channels = bucket
            .get("channels")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for channel in channels {
            let Some(id) = channel.get("id").and_then(Value::as_str) else {
                warn!("Channel without id skipped, day: {day}");
                continue;
            };
            let xmltv_id = provider_to_xmltv(id);
            if !day_channels.contains(&xmltv_id) {
                day_channels.push(xmltv_id.clone());
            }
            if seen.insert(xmltv_id.clone()) {
                let name = channel
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(id);
                data.channels.push(Channel::new(xmltv_id, name, true));
            }

            let programs = channel
                .get("programs")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            collect_day_events(&mut data.events, programs, day);
        }

        check_expected_channels(expected_ids, &day_channels, day);
    }

    Ok(data)
}

fn collect_day_events(events: &mut Vec<RawEvent>, programs: &[Value], day: NaiveDate) {
    for program in programs {
        if program.get("start_datetime").is_none_or(Value::is_null) {
            warn!("Invalid program. Skipped. program: {program}");
            continue;
        }

        let event: RawEvent = match serde_json::from_value(program.clone()) {
            Ok(event) => event,
            Err(e) => {
                warn!("Invalid program. Skipped. program: {program} ({e})");
                continue;
            }
        };

        match event.start_datetime {
            Some(start) if start.date_naive() == day => events.push(event),
            Some(start) => debug!(
                "Program start time is outside of the day. Skipped. day: {day}, program: {} ({}) - {}",
                event.title.as_deref().unwrap_or("None"),
                event.id,
                start.to_rfc3339()
            ),
            None => warn!("Invalid program. Skipped. program: {program}"),
        }
    }
}

/// Log how the channels received for `day` differ from the requested ones
///
/// Missing channels mean missing programmes, so every deviation is a warning.
pub fn check_expected_channels(expected_ids: &[String], retrieved_ids: &[String], day: NaiveDate) {
    if retrieved_ids.is_empty() {
        warn!("No programs received on {day}");
    } else if expected_ids.len() != retrieved_ids.len() {
        warn!(
            "Requested and received channel count does not match ({} != {}) for day {day}",
            expected_ids.len(),
            retrieved_ids.len()
        );
    }

    let expected: Vec<String> = expected_ids.iter().map(|id| provider_to_xmltv(id)).collect();

    if retrieved_ids.is_empty() {
        warn!("No channels received, day: {day}");
    } else {
        for missing in expected.iter().filter(|id| !retrieved_ids.contains(id)) {
            warn!("Missing channel: {missing}, day: {day}");
        }
    }

    for extra in retrieved_ids.iter().filter(|id| !expected.contains(id)) {
        warn!("Extra channel: {extra}, day: {day}");
    }
}
