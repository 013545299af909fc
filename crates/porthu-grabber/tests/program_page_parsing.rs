use porthu_grabber::models::{Category, Person, Programme, RawEvent, Rating};
use porthu_grabber::parser::{DetailPage, ProgramPageParser};
use serde_json::Value;

const LISTING: &str = include_str!("fixtures/listing.json");
const SERIES_PAGE: &str = include_str!("fixtures/series_detail.html");
const MOVIE_PAGE: &str = include_str!("fixtures/movie_detail.html");

fn listed_event(day: &str, channel: usize, program: usize) -> RawEvent {
    let listing: Value = serde_json::from_str(LISTING).unwrap();
    serde_json::from_value(listing[day]["channels"][channel]["programs"][program].clone()).unwrap()
}

fn parse_one(event: RawEvent, page: Option<&DetailPage>) -> Programme {
    let mut results = ProgramPageParser::parse(&[event], page);
    assert_eq!(results.len(), 1);
    results.remove(0).unwrap()
}

fn person(name: &str, url: &str) -> Person {
    Person {
        name: name.to_string(),
        url: Some(format!("https://port.hu/adatlap/szemely/{url}")),
    }
}

#[test]
fn test_series_with_detail_page() {
    let page = DetailPage::from_html(
        "https://port.hu/adatlap/sorozat/tv/south-park/glutenmentes-ebola/event-tv-1159526715-194/episode-317219",
        SERIES_PAGE,
    );
    let programme = parse_one(listed_event("2023-02-09", 0, 0), Some(&page));

    assert_eq!(programme.channel, "194.port.hu");
    assert_eq!(programme.title, "South Park");
    assert_eq!(
        programme.sub_title.as_deref(),
        Some("Gluténmentes ebola - (amerikai animációs sorozat, 18/2. rész, 1997)")
    );
    assert_eq!(
        programme.description.as_deref(),
        Some(
            "Az aktuális rész ismertetője: South Park gluténmentessé válik.\n\n\
             A műsor ismertetése: A South Park minden idők egyik legismertebb animációs \
             sorozata, 4 mocskos szájú negyedikesről, amely szürreális humorával űz gúnyt \
             világunkból."
        )
    );

    let credits = programme.credits.as_ref().unwrap();
    assert_eq!(
        credits.directors,
        vec![
            person("Trey Parker", "trey-parker/person-18931"),
            person("Matt Stone", "matt-stone/person-18932"),
            person("Eric Stough", "eric-stough/person-170297"),
        ]
    );
    assert_eq!(credits.actors.len(), 5);
    assert_eq!(credits.actors[2], person("Isaac Hayes", "isaac-hayes/person-10488"));
    assert!(credits.producers.is_empty());

    assert_eq!(programme.date.as_deref(), Some("1997"));
    assert_eq!(
        programme.categories,
        vec![
            Category::new("Movie/Drama", "en"),
            Category::new("Film/Dráma", "hu"),
            Category::new("series", "en"),
        ]
    );
    assert_eq!(programme.length.as_deref(), Some("25"));
    assert_eq!(
        programme.episode_num.as_ref().map(|n| n.xmltv_ns()).as_deref(),
        Some("17.1.0/1")
    );
    assert!(!programme.previously_shown);
    assert_eq!(
        programme.ratings,
        vec![Rating {
            value: "18".to_string(),
            icon: Some("https://port.hu/img/agelimit/raster/18_age_icon_black.png".to_string()),
        }]
    );
}

#[test]
fn test_series_from_listing_only() {
    let programme = parse_one(listed_event("2023-02-09", 0, 0), None);

    assert_eq!(
        programme.sub_title.as_deref(),
        Some("Gluténmentes ebola - (amerikai animációs sorozat, 18/2. rész)")
    );
    assert_eq!(programme.description, None);
    assert_eq!(programme.credits, None);
    assert_eq!(programme.date, None);
    assert_eq!(programme.length, None);
    assert_eq!(
        programme.episode_num.as_ref().map(|n| n.xmltv_ns()).as_deref(),
        Some("17.1.0/1")
    );
    assert_eq!(
        programme.urls,
        vec![
            "https://port.hu/adatlap/sorozat/tv/south-park/glutenmentes-ebola/event-tv-1159526715-194/episode-317219"
                .to_string()
        ]
    );
}

#[test]
fn test_movie_with_detail_page() {
    let page = DetailPage::from_html(
        "https://port.hu/adatlap/film/tv/marley-meg-en-marley-me/event-tv-1159915099-6/movie-100058",
        MOVIE_PAGE,
    );
    let programme = parse_one(listed_event("2023-02-11", 0, 0), Some(&page));

    assert_eq!(programme.channel, "6.port.hu");
    assert_eq!(programme.start.to_rfc3339(), "2023-02-11T10:05:00+01:00");
    assert_eq!(
        programme.stop.map(|stop| stop.to_rfc3339()).as_deref(),
        Some("2023-02-11T12:00:00+01:00")
    );
    assert_eq!(
        programme.sub_title.as_deref(),
        Some("(amerikai vígjáték, filmdráma, családi film, 2008)")
    );
    assert_eq!(programme.length.as_deref(), Some("118"));
    assert_eq!(programme.date.as_deref(), Some("2008"));
    assert_eq!(programme.episode_num, None);
    assert_eq!(
        programme.categories,
        vec![
            Category::new("Comedy", "en"),
            Category::new("Movie/Drama", "en"),
            Category::new("Children's/Youth programmes", "en"),
            Category::new("Vígjáték", "hu"),
            Category::new("Film/Dráma", "hu"),
            Category::new("Gyerek/Ifjúsági program", "hu"),
            Category::new("movie", "en"),
        ]
    );

    let credits = programme.credits.as_ref().unwrap();
    assert_eq!(credits.directors.len(), 1);
    assert_eq!(credits.directors[0].name, "David Frankel");
    assert_eq!(credits.actors[2].url, None);
    let producers: Vec<&str> = credits.producers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(producers, vec!["Gil Netter", "Karen Rosenfelt"]);
    assert_eq!(credits.composers[0].name, "Theodore Shapiro");

    assert_eq!(programme.ratings[0].value, "12");
}

#[test]
fn test_repeat_and_missing_title_in_one_batch() {
    let mut untitled = listed_event("2023-02-09", 0, 1);
    untitled.title = None;
    let events = vec![listed_event("2023-02-09", 0, 1), untitled];

    let results = ProgramPageParser::parse(&events, None);
    assert_eq!(results.len(), 2);
    let repeat = results[0].as_ref().unwrap();
    assert!(repeat.previously_shown);
    assert!(repeat.ratings.is_empty());

    let error = results[1].as_ref().unwrap_err().to_string();
    assert!(error.contains("No title present for program on channel '194.port.hu'"));
}
