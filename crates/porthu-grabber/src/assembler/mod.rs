//! Guide assembly
//!
//! A run goes through the provider limits, one listing request for the whole
//! window and, in slow mode, the detail pages of the listed events. Listing
//! failures end the run with an empty guide; detail-page failures only cost
//! the affected programmes their extra data.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::config::RunOptions;
use crate::errors::AppResult;
use crate::fetch::{ClientFactory, EndpointPool, HostResolver};
use crate::models::{ApiLimits, Channel, DayWindow, Guide, Programme, RawEvent};
use crate::parser::ProgramPageParser;
use crate::sources::porthu::{HOST, PortHuApi, to_absolute_url, xmltv_to_provider};

pub mod progress;
pub mod worker;

pub use progress::ProgressReporter;
pub use worker::{DetailGroup, WorkerContext, WorkerPool};

/// Drives a complete retrieval run
pub struct GuideAssembler {
    api: PortHuApi,
    clients: Arc<dyn ClientFactory>,
    resolver: Arc<dyn HostResolver>,
    options: RunOptions,
}

impl GuideAssembler {
    pub fn new(
        api: PortHuApi,
        clients: Arc<dyn ClientFactory>,
        resolver: Arc<dyn HostResolver>,
        options: RunOptions,
    ) -> Self {
        Self {
            api,
            clients,
            resolver,
            options,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Provider limits, with a warning when they are unusable
    pub async fn fetch_limits(&self, today: NaiveDate) -> ApiLimits {
        let limits = self.api.fetch_limits(today).await;
        if !limits.valid {
            warn!("Invalid API limits received, the retrieval window can't be checked");
        }
        limits
    }

    /// Days to retrieve: the requested count, or the default policy
    pub fn plan_window(&self, limits: &ApiLimits, today: NaiveDate) -> DayWindow {
        let offset = self.options.offset;
        let days = self
            .options
            .days
            .unwrap_or_else(|| limits.default_days(offset));

        if limits.exceeds(offset, days) {
            info!(
                "Requested days (offset {offset}, {days} day(s)) exceed the currently advertised \
                 range ({} - {}), some days may be empty",
                limits.start_offset, limits.end_offset
            );
        }
        DayWindow::from_today(today, offset, days)
    }

    /// Retrieve the guide of `channels` for `window`
    pub async fn retrieve_guide(&self, channels: &[Channel], window: &DayWindow) -> Guide {
        let provider_ids: Vec<String> = channels
            .iter()
            .map(|channel| xmltv_to_provider(&channel.id))
            .collect();

        let listing = match self.api.fetch_listing(&provider_ids, window).await {
            Ok(listing) => listing,
            Err(e) => {
                error!("Retrieving the program listing failed: {e}");
                return Guide::default();
            }
        };

        let programmes = if self.options.slow {
            self.enrich(listing.events).await
        } else {
            collect_programmes(ProgramPageParser::parse(&listing.events, None))
        };

        info!(
            "Assembled {} programme(s) on {} channel(s)",
            programmes.len(),
            listing.channels.len()
        );
        Guide {
            channels: listing.channels,
            programmes,
        }
    }

    async fn enrich(&self, events: Vec<RawEvent>) -> Vec<Programme> {
        let (groups, direct) = group_by_detail_url(events);
        let mut programmes = collect_programmes(ProgramPageParser::parse(&direct, None));
        if groups.is_empty() {
            return programmes;
        }

        let endpoints = match EndpointPool::resolve(self.resolver.as_ref(), HOST).await {
            Ok(pool) => pool.assign(self.options.jobs),
            Err(e) => {
                error!("{e}. Retrieving program details is not possible, using basic information");
                for group in &groups {
                    programmes.extend(collect_programmes(group.parse_basic()));
                }
                return programmes;
            }
        };

        info!(
            "Retrieving details of {} page(s) with {} worker(s)",
            groups.len(),
            endpoints.len()
        );
        let pool = WorkerPool::new(Arc::clone(&self.clients), self.options.fetch_policy());
        programmes.extend(pool.run(groups, endpoints.into_iter().map(Some).collect()).await);
        programmes
    }
}

/// Warn about enabled channels the provider no longer lists
pub fn check_enabled_channels(limits: &ApiLimits, enabled: &[Channel]) -> usize {
    if !limits.valid {
        return 0;
    }
    let mut missing = 0;
    for channel in enabled {
        if !limits.channels.iter().any(|known| known.id == channel.id) {
            warn!(
                "Channel '{}' ({}) is not offered by the provider anymore",
                channel.name, channel.id
            );
            missing += 1;
        }
    }
    missing
}

/// Split events into detail-url groups, first-seen order, and events without
/// a detail page
pub fn group_by_detail_url(events: Vec<RawEvent>) -> (Vec<DetailGroup>, Vec<RawEvent>) {
    let mut groups: Vec<DetailGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut direct = Vec::new();

    for event in events {
        let Some(url) = event.detail_url().map(to_absolute_url) else {
            direct.push(event);
            continue;
        };
        match index.get(&url) {
            Some(&position) => groups[position].events.push(event),
            None => {
                index.insert(url.clone(), groups.len());
                groups.push(DetailGroup {
                    url,
                    events: vec![event],
                });
            }
        }
    }
    (groups, direct)
}

/// Keep the built programmes, logging the entries that had to be dropped
pub(crate) fn collect_programmes(results: Vec<AppResult<Programme>>) -> Vec<Programme> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(programme) => Some(programme),
            Err(e) => {
                error!("{e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{HttpFetch, HttpResponse, MockClientFactory, MockHostResolver, MockHttpFetch};
    use serde_json::{Value, json};
    use tracing_test::traced_test;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 2, 11).unwrap()
    }

    fn listing() -> Value {
        json!({
            "2023-02-11": {
                "channels": [{
                    "id": "tvchannel-5",
                    "name": "RTL",
                    "programs": [
                        {
                            "id": "event-tv-1159915099-5",
                            "title": "Marley meg én",
                            "start_datetime": "2023-02-11T10:05:00+01:00",
                            "end_datetime": "2023-02-11T12:00:00+01:00",
                            "short_description": "amerikai vígjáték, 2008",
                            "film_url": "/adatlap/film/tv/marley-meg-en/movie-100058"
                        },
                        {
                            "id": "event-tv-1159915100-5",
                            "title": "Marley meg én",
                            "start_datetime": "2023-02-11T22:05:00+01:00",
                            "film_url": "/adatlap/film/tv/marley-meg-en/movie-100058",
                            "is_repeat": true
                        },
                        {
                            "id": "event-tv-1159915101-5",
                            "title": "Híradó",
                            "start_datetime": "2023-02-11T18:00:00+01:00",
                            "film_url": ""
                        }
                    ]
                }]
            }
        })
    }

    fn api_answering(body: Value, status: u16) -> PortHuApi {
        let mut http = MockHttpFetch::new();
        http.expect_get().returning(move |url, _, _| {
            Ok(HttpResponse {
                status,
                url: url.to_string(),
                body: body.to_string(),
            })
        });
        PortHuApi::new(Arc::new(http))
    }

    fn assembler(api: PortHuApi, resolver: MockHostResolver, options: RunOptions) -> GuideAssembler {
        let mut clients = MockClientFactory::new();
        clients.expect_create().returning(|_| {
            let mut http = MockHttpFetch::new();
            http.expect_get().returning(|url, _, _| {
                Ok(HttpResponse {
                    status: 200,
                    url: url.to_string(),
                    body: r#"<div class="description">Kutyás film.</div>"#.to_string(),
                })
            });
            let http: Arc<dyn HttpFetch> = Arc::new(http);
            Ok(http)
        });
        GuideAssembler::new(api, Arc::new(clients), Arc::new(resolver), options)
    }

    fn rtl() -> Vec<Channel> {
        vec![Channel::new("5.port.hu", "RTL", true)]
    }

    #[test]
    fn test_grouping_by_detail_url() {
        let guide = listing();
        let programs = guide["2023-02-11"]["channels"][0]["programs"].as_array().unwrap();
        let events: Vec<RawEvent> = programs
            .iter()
            .map(|p| serde_json::from_value(p.clone()).unwrap())
            .collect();

        let (groups, direct) = group_by_detail_url(events);
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].url,
            "https://port.hu/adatlap/film/tv/marley-meg-en/movie-100058"
        );
        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0].title.as_deref(), Some("Híradó"));
    }

    #[test]
    fn test_plan_window_uses_advertised_days() {
        let limits = ApiLimits {
            valid: true,
            start_offset: -1,
            end_offset: 13,
            channels: Vec::new(),
        };
        let assembler = assembler(
            api_answering(json!({}), 200),
            MockHostResolver::new(),
            RunOptions::default(),
        );

        let window = assembler.plan_window(&limits, today());
        assert_eq!(window.days, 14);
        assert_eq!(window.start, today());
    }

    #[tokio::test]
    async fn test_basic_run() {
        let assembler = assembler(
            api_answering(listing(), 200),
            MockHostResolver::new(),
            RunOptions::default(),
        );
        let window = DayWindow::from_today(today(), 0, 1);

        let guide = assembler.retrieve_guide(&rtl(), &window).await;
        assert_eq!(guide.channels, vec![Channel::new("5.port.hu", "RTL", true)]);
        assert_eq!(guide.programmes.len(), 3);
        assert!(guide.programmes.iter().all(|p| p.description.is_none()));
    }

    #[tokio::test]
    async fn test_slow_run_enriches_grouped_pages() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .returning(|_| Ok(vec!["10.0.0.1:443".parse().unwrap()]));
        let options = RunOptions {
            slow: true,
            ..RunOptions::default()
        };
        let assembler = assembler(api_answering(listing(), 200), resolver, options);

        let guide = assembler
            .retrieve_guide(&rtl(), &DayWindow::from_today(today(), 0, 1))
            .await;
        let described = guide
            .programmes
            .iter()
            .filter(|p| p.description.as_deref() == Some("Kutyás film."))
            .count();
        assert_eq!(guide.programmes.len(), 3);
        assert_eq!(described, 2);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_unresolvable_host_falls_back_to_basic() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().returning(|_| Ok(Vec::new()));
        let options = RunOptions {
            slow: true,
            ..RunOptions::default()
        };
        let assembler = assembler(api_answering(listing(), 200), resolver, options);

        let guide = assembler
            .retrieve_guide(&rtl(), &DayWindow::from_today(today(), 0, 1))
            .await;
        assert_eq!(guide.programmes.len(), 3);
        assert!(guide.programmes.iter().all(|p| p.description.is_none()));
        assert!(logs_contain("No IP address returned."));
    }

    #[tokio::test]
    async fn test_listing_failure_gives_empty_guide() {
        let assembler = assembler(
            api_answering(json!({}), 500),
            MockHostResolver::new(),
            RunOptions::default(),
        );
        let guide = assembler
            .retrieve_guide(&rtl(), &DayWindow::from_today(today(), 0, 1))
            .await;
        assert!(guide.is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_invalid_limits_are_reported() {
        let assembler = assembler(
            api_answering(json!({"channels": []}), 200),
            MockHostResolver::new(),
            RunOptions::default(),
        );
        let limits = assembler.fetch_limits(today()).await;
        assert!(!limits.valid);
        assert!(logs_contain("Invalid API limits received"));
        assert_eq!(assembler.plan_window(&limits, today()).days, 30);
    }

    #[test]
    #[traced_test]
    fn test_missing_enabled_channels_warned() {
        let limits = ApiLimits {
            valid: true,
            start_offset: 0,
            end_offset: 7,
            channels: vec![Channel::new("5.port.hu", "RTL", false)],
        };
        let enabled = vec![
            Channel::new("5.port.hu", "RTL", true),
            Channel::new("99.port.hu", "Megszűnt", true),
        ];
        assert_eq!(check_enabled_channels(&limits, &enabled), 1);
        assert!(logs_contain("Channel 'Megszűnt' (99.port.hu) is not offered"));
    }
}
