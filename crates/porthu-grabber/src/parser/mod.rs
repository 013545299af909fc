//! Programme construction from listing entries and detail pages
//!
//! Three sources feed a programme besides the listing entry itself: the
//! page's JSON-LD block, its OpenGraph properties and the listing's short
//! descriptor. JSON-LD is preferred, OpenGraph fills the runtime and the
//! release date (the JSON-LD year stands in when OpenGraph has none), and
//! the descriptor is only parsed when structured data leaves gaps.

use tracing::debug;

use crate::categories::CategoryMapper;
use crate::errors::{AppError, AppResult};
use crate::models::{Credits, EpisodeNum, Programme, Rating, RawEvent};
use crate::sources::porthu::{event_to_xmltv, to_absolute_url, to_raster_image};

pub mod descriptor;
pub mod page;
pub mod subtitle;

pub use descriptor::{Descriptor, resolve_episode, resolve_season, roman_to_u32};
pub use page::{DetailPage, JsonLd, OpenGraph};
pub use subtitle::{SubtitleParts, append_if_not_empty, choose_subtitle};

/// Builds programmes for all listing entries sharing one detail page
pub struct ProgramPageParser;

impl ProgramPageParser {
    /// One result per event, in input order
    ///
    /// `page` is `None` when the detail page was not requested or could not be
    /// retrieved; the programmes then carry listing data only. An event
    /// without a title yields a `DataIntegrity` error in its slot.
    pub fn parse(events: &[RawEvent], page: Option<&DetailPage>) -> Vec<AppResult<Programme>> {
        events
            .iter()
            .map(|event| Self::parse_event(event, page))
            .collect()
    }

    fn parse_event(event: &RawEvent, page: Option<&DetailPage>) -> AppResult<Programme> {
        let channel = event_to_xmltv(&event.id);
        let start_text = event
            .start_datetime
            .map_or_else(|| "unknown".to_string(), |start| start.to_rfc3339());

        let Some(title) = event
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
        else {
            return Err(AppError::data_integrity(format!(
                "No title present for program on channel '{channel}' at '{start_text}'. \
                 Every program should have a title"
            )));
        };
        let Some(start) = event.start_datetime else {
            return Err(AppError::data_integrity(format!(
                "No start time present for program '{title}' on channel '{channel}'"
            )));
        };

        let json_ld = page.and_then(|page| page.json_ld.as_ref());
        let og = page.map(|page| &page.open_graph);
        let og_date = og
            .and_then(|og| og.release_date.as_deref())
            .or_else(|| json_ld.and_then(|ld| ld.release_date.as_deref()));
        let og_duration = og.and_then(|og| og.duration.as_deref());
        let jld_genre = json_ld.and_then(|ld| ld.genre.as_deref());
        let jld_season = json_ld.and_then(|ld| ld.season_number.as_deref());
        let jld_episode = json_ld.and_then(|ld| ld.episode_number.as_deref());

        let mut short_description = event.short_description.clone();
        let mut descriptor = Descriptor::default();
        let structured_gaps =
            jld_genre.is_none() || og_date.is_none() || jld_season.is_none() || jld_episode.is_none();
        if structured_gaps {
            if let Some(raw) = event.short_description.as_deref() {
                let normalized = Descriptor::normalize(raw);
                if let Some(parsed) = Descriptor::parse(&normalized) {
                    debug!("Parsed descriptor '{normalized}' as {parsed:?}");
                    descriptor = parsed;
                }
                short_description = Some(normalized);
            }
        }

        let season = resolve_season(jld_season, descriptor.season.as_deref());
        let episode = resolve_episode(jld_episode, descriptor.episode.as_deref());
        let episode_title = event.episode_title.as_deref();

        let mut programme = Programme::new(start, channel, title);
        programme.stop = event.end_datetime;
        programme.description = page.and_then(|page| page.description.clone());

        if let Some(ld) = json_ld {
            let credits = Credits {
                directors: ld.directors.clone(),
                actors: ld.actors.clone(),
                producers: ld.producers.clone(),
                composers: ld.composers.clone(),
            };
            programme.credits = (!credits.is_empty()).then_some(credits);
        }

        programme.date = og_date
            .map(str::to_string)
            .or_else(|| descriptor.year.clone());

        let labels = jld_genre.or(descriptor.categories.as_deref());
        if let Some(labels) = labels.filter(|labels| !labels.is_empty()) {
            let labels: Vec<&str> = labels.split(", ").collect();
            programme.categories = CategoryMapper::map(&labels);
        }

        programme.length = og_duration.map(str::to_string);
        if let Some(url) = event.detail_url() {
            programme.urls.push(to_absolute_url(url));
        }
        programme.episode_num = EpisodeNum::new(season, episode);
        programme.previously_shown = event.is_repeat();

        if let Some(restriction) = &event.restriction {
            if let Some(age_limit) = &restriction.age_limit {
                programme.ratings.push(Rating {
                    value: age_limit.to_string(),
                    icon: restriction
                        .age_limit_image
                        .as_deref()
                        .filter(|icon| !icon.is_empty())
                        .map(|icon| to_absolute_url(&to_raster_image(icon))),
                });
            }
        }

        let structured_subtitle = json_ld.map(|ld| {
            let countries = ld.countries.join("-");
            SubtitleParts {
                episode_title,
                countries: Some(&countries),
                genre: jld_genre,
                season: jld_season,
                episode: jld_episode,
                release_date: og_date,
            }
            .build()
        });

        let descriptor_subtitle = descriptor.has_any().then(|| {
            let season = season.map(|n| n.to_string());
            let episode = episode.map(|n| n.to_string());
            SubtitleParts {
                episode_title,
                countries: descriptor.countries.as_deref(),
                genre: descriptor.categories.as_deref(),
                season: season.as_deref(),
                episode: episode.as_deref(),
                release_date: descriptor.year.as_deref(),
            }
            .build()
        });

        programme.sub_title = choose_subtitle(
            structured_subtitle,
            descriptor_subtitle,
            short_description.as_deref(),
            episode_title,
        );

        Ok(programme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use serde_json::json;

    fn event(value: serde_json::Value) -> RawEvent {
        serde_json::from_value(value).unwrap()
    }

    fn south_park() -> RawEvent {
        event(json!({
            "id": "event-tv-1159526715-194",
            "start_datetime": "2023-02-09T00:25:00+01:00",
            "end_datetime": "2023-02-09T00:55:00+01:00",
            "title": "South Park",
            "episode_title": "Gluténmentes ebola",
            "short_description": "amerikai animációs sorozat, XVIII / 2. rész",
            "is_repeat": false,
            "film_url": "/adatlap/sorozat/tv/south-park/glutenmentes-ebola/event-tv-1159526715-194/episode-317219",
            "restriction": {
                "age_limit": 18,
                "ageLimitImage": "/img/agelimit/vector/18_age_icon_black.svg"
            }
        }))
    }

    #[test]
    fn test_listing_only_series() {
        let results = ProgramPageParser::parse(&[south_park()], None);
        assert_eq!(results.len(), 1);
        let programme = results.into_iter().next().unwrap().unwrap();

        assert_eq!(programme.channel, "194.port.hu");
        assert_eq!(programme.title, "South Park");
        assert_eq!(
            programme.sub_title.as_deref(),
            Some("Gluténmentes ebola - (amerikai animációs sorozat, 18/2. rész)")
        );
        assert_eq!(
            programme.categories,
            vec![
                Category::new("Movie/Drama", "en"),
                Category::new("Film/Dráma", "hu"),
                Category::new("series", "en"),
            ]
        );
        assert_eq!(programme.episode_num.unwrap().xmltv_ns(), "17.1.0/1");
        assert_eq!(
            programme.urls,
            vec![
                "https://port.hu/adatlap/sorozat/tv/south-park/glutenmentes-ebola/event-tv-1159526715-194/episode-317219"
                    .to_string()
            ]
        );
        assert_eq!(
            programme.ratings,
            vec![Rating {
                value: "18".to_string(),
                icon: Some("https://port.hu/img/agelimit/raster/18_age_icon_black.png".to_string()),
            }]
        );
        assert!(programme.description.is_none());
        assert!(programme.credits.is_none());
        assert!(!programme.previously_shown);
    }

    #[test]
    fn test_structured_page_data_wins() {
        let page = DetailPage {
            url: "https://port.hu/adatlap/x".to_string(),
            json_ld: Some(JsonLd {
                genre: Some("animációs sorozat".to_string()),
                episode_number: Some("2".to_string()),
                season_number: Some("18".to_string()),
                countries: vec!["amerikai".to_string()],
                ..JsonLd::default()
            }),
            open_graph: OpenGraph {
                duration: Some("25".to_string()),
                release_date: Some("1997".to_string()),
            },
            description: Some("Leírás.".to_string()),
        };

        let programme = ProgramPageParser::parse(&[south_park()], Some(&page))
            .pop()
            .unwrap()
            .unwrap();

        assert_eq!(
            programme.sub_title.as_deref(),
            Some("Gluténmentes ebola - (amerikai animációs sorozat, 18/2. rész, 1997)")
        );
        assert_eq!(programme.date.as_deref(), Some("1997"));
        assert_eq!(programme.length.as_deref(), Some("25"));
        assert_eq!(programme.description.as_deref(), Some("Leírás."));
    }

    #[test]
    fn test_json_ld_year_when_open_graph_has_none() {
        let page = DetailPage {
            url: "https://port.hu/adatlap/x".to_string(),
            json_ld: Some(JsonLd {
                genre: Some("animációs sorozat".to_string()),
                episode_number: Some("2".to_string()),
                season_number: Some("18".to_string()),
                release_date: Some("1997".to_string()),
                countries: vec!["amerikai".to_string()],
                ..JsonLd::default()
            }),
            open_graph: OpenGraph::default(),
            description: None,
        };

        let programme = ProgramPageParser::parse(&[south_park()], Some(&page))
            .pop()
            .unwrap()
            .unwrap();
        assert_eq!(programme.date.as_deref(), Some("1997"));
        assert_eq!(
            programme.sub_title.as_deref(),
            Some("Gluténmentes ebola - (amerikai animációs sorozat, 18/2. rész, 1997)")
        );
    }

    #[test]
    fn test_missing_title_fails_only_that_entry() {
        let untitled = event(json!({
            "id": "event-tv-1-6",
            "start_datetime": "2023-02-11T10:05:00+01:00"
        }));
        let results = ProgramPageParser::parse(&[untitled, south_park()], None);

        assert_eq!(results.len(), 2);
        match &results[0] {
            Err(AppError::DataIntegrity { message }) => {
                assert_eq!(
                    message,
                    "No title present for program on channel '6.port.hu' at \
                     '2023-02-11T10:05:00+01:00'. Every program should have a title"
                );
            }
            other => panic!("expected data integrity error, got {other:?}"),
        }
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_blank_title_counts_as_missing() {
        let blank = event(json!({
            "id": "event-tv-2-6",
            "start_datetime": "2023-02-11T11:00:00+01:00",
            "title": "  "
        }));
        let results = ProgramPageParser::parse(&[blank, south_park()], None);

        assert!(matches!(results[0], Err(AppError::DataIntegrity { .. })));
        assert_eq!(results[1].as_ref().unwrap().title, "South Park");
    }

    #[test]
    fn test_multi_word_country() {
        let vadmacska = event(json!({
            "id": "event-tv-1273317596-304",
            "start_datetime": "2023-07-10T15:50:00+02:00",
            "end_datetime": "2023-07-10T16:55:00+02:00",
            "title": "Vadmacska",
            "short_description": "venezuelai-amerikai-Puerto Rico-i filmsorozat, 230. rész",
            "film_url": "/adatlap/film/tv/vadmacska-la-gata-salvaje/event-tv-1273317596-304/episode-108551"
        }));

        let programme = ProgramPageParser::parse(&[vadmacska], None)
            .pop()
            .unwrap()
            .unwrap();
        assert_eq!(
            programme.sub_title.as_deref(),
            Some("(venezuelai-amerikai-Puerto Rico-i filmsorozat, 230. rész)")
        );
        assert_eq!(programme.episode_num.unwrap().xmltv_ns(), ".229.0/1");
        assert!(programme.ratings.is_empty());
    }

    #[test]
    fn test_zero_age_limit_and_repeat() {
        let news = event(json!({
            "id": "event-tv-1159928131-1",
            "start_datetime": "2023-02-09T23:30:00+01:00",
            "title": "VILÁGHÍRADÓ",
            "short_description": "",
            "is_repeat": true,
            "restriction": {"age_limit": 0, "ageLimitImage": ""}
        }));

        let programme = ProgramPageParser::parse(&[news], None)
            .pop()
            .unwrap()
            .unwrap();
        assert!(programme.previously_shown);
        assert!(programme.stop.is_none());
        assert!(programme.sub_title.is_none());
        assert!(programme.categories.is_empty());
        assert_eq!(
            programme.ratings,
            vec![Rating {
                value: "0".to_string(),
                icon: None
            }]
        );
    }
}
