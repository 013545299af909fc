//! Client of the port.hu JSON API

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ids::provider_to_xmltv;
use super::listing::{ListingData, extract_channel_data};
use super::{DATE_FORMAT, INIT_URL, LISTING_URL};
use crate::config::defaults::{INIT_TIMEOUT, LISTING_TIMEOUT};
use crate::errors::{AppError, AppResult};
use crate::fetch::HttpFetch;
use crate::models::{ApiLimits, Channel, DayWindow};

/// Init (catalog and advertised days) and listing endpoints
#[derive(Clone)]
pub struct PortHuApi {
    http: Arc<dyn HttpFetch>,
}

impl PortHuApi {
    pub fn new(http: Arc<dyn HttpFetch>) -> Self {
        Self { http }
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> AppResult<Value> {
        let response = self.http.get(url, query, timeout).await?;
        if !response.is_ok() {
            return Err(AppError::upstream_data(
                url,
                format!("Response code indicating failure: {}", response.status),
            ));
        }
        serde_json::from_str(&response.body)
            .map_err(|e| AppError::upstream_data(url, format!("Malformed JSON: {e}")))
    }

    /// Advertised day window relative to `today` and the channel catalog
    ///
    /// Never fails: an unusable answer gives limits with `valid` cleared.
    pub async fn fetch_limits(&self, today: NaiveDate) -> ApiLimits {
        match self.get_json(INIT_URL, &[], INIT_TIMEOUT).await {
            Ok(body) => parse_limits(&body, today),
            Err(e) => {
                warn!("Failed to read the API limits: {e}");
                ApiLimits::invalid()
            }
        }
    }

    /// Every channel the provider offers, all disabled
    pub async fn fetch_channel_catalog(&self) -> AppResult<Vec<Channel>> {
        let body = self.get_json(INIT_URL, &[], INIT_TIMEOUT).await?;
        let channels = body
            .get("channels")
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::upstream_data(INIT_URL, "No channel list in response"))?;

        Ok(channels
            .iter()
            .filter_map(|channel| {
                let channel = catalog_channel(channel);
                if channel.is_none() {
                    debug!("Skipping catalog entry without id");
                }
                channel
            })
            .collect())
    }

    /// Listing of `channel_ids` (provider form) for the days of `window`
    pub async fn fetch_listing(
        &self,
        channel_ids: &[String],
        window: &DayWindow,
    ) -> AppResult<ListingData> {
        let from = window.start.format(DATE_FORMAT).to_string();
        let to = window.end().format(DATE_FORMAT).to_string();
        info!(
            "Retrieving programs from {from} to {to} for {} channel(s)",
            channel_ids.len()
        );

        let mut query: Vec<(String, String)> = channel_ids
            .iter()
            .map(|id| ("channel_id[]".to_string(), id.clone()))
            .collect();
        query.push(("i_datetime_from".to_string(), from));
        query.push(("i_datetime_to".to_string(), to));

        let body = self.get_json(LISTING_URL, &query, LISTING_TIMEOUT).await?;
        let data = extract_channel_data(&body, channel_ids, window.start)?;
        debug!(
            "Retrieved {} programs on {} channel(s)",
            data.events.len(),
            data.channels.len()
        );
        Ok(data)
    }
}

/// Catalog entry with its id converted to XMLTV form, `None` without an id
fn catalog_channel(value: &Value) -> Option<Channel> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?;
    let name = value.get("name").and_then(Value::as_str).unwrap_or(id);
    Some(Channel::new(provider_to_xmltv(id), name, false))
}

fn parse_day(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

fn parse_limits(body: &Value, today: NaiveDate) -> ApiLimits {
    let mut limits = ApiLimits::invalid();
    limits.valid = true;

    let days = body.get("daysDate").and_then(Value::as_array);
    let bounds = days.and_then(|days| Some((parse_day(days.first()?)?, parse_day(days.last()?)?)));
    match bounds {
        Some((first, last)) => {
            limits.start_offset = (first - today).num_days();
            limits.end_offset = (last - today).num_days();
        }
        None => limits.valid = false,
    }

    if let Some(channels) = body.get("channels").and_then(Value::as_array) {
        for channel in channels {
            match catalog_channel(channel) {
                Some(channel) => limits.channels.push(channel),
                None => limits.valid = false,
            }
        }
    }

    debug!(
        "API limits: valid={}, offsets {}..={}, {} channel(s)",
        limits.valid,
        limits.start_offset,
        limits.end_offset,
        limits.channels.len()
    );
    limits
}
