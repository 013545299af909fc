//! Extraction of the embedded metadata of a programme detail page

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

use super::descriptor::Descriptor;
use crate::models::Person;

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("JSON-LD selector is valid")
});
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property]").expect("meta selector is valid"));
static DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| {
        Selector::parse(r#"div[class="description"]"#).expect("description selector is valid")
    });

const PROGRAMME_SECTION_HEADING: &str = "A műsor ismertetése:";

/// Schema.org data of the page's first JSON-LD object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonLd {
    /// Comma separated genre list, normalized
    pub genre: Option<String>,
    pub episode_number: Option<String>,
    pub season_number: Option<String>,
    /// Year of `datePublished`, else of `dateCreated`
    pub release_date: Option<String>,
    pub countries: Vec<String>,
    pub actors: Vec<Person>,
    pub directors: Vec<Person>,
    pub producers: Vec<Person>,
    pub composers: Vec<Person>,
}

/// OpenGraph video properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraph {
    /// Runtime in minutes
    pub duration: Option<String>,
    pub release_date: Option<String>,
}

/// Everything the grabber uses from one detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPage {
    pub url: String,
    pub json_ld: Option<JsonLd>,
    pub open_graph: OpenGraph,
    pub description: Option<String>,
}

impl DetailPage {
    /// Extract the page data from a received HTML body
    pub fn from_html(url: &str, html: &str) -> Self {
        let document = Html::parse_document(html);

        let description = extract_description(&document);
        if description.is_none() {
            warn!("A response is received but the description can't be found. url: {url}");
        }

        Self {
            url: url.to_string(),
            json_ld: extract_json_ld(&document),
            open_graph: extract_open_graph(&document),
            description,
        }
    }
}

fn extract_json_ld(document: &Html) -> Option<JsonLd> {
    document.select(&JSON_LD_SELECTOR).find_map(|script| {
        let text: String = script.text().collect();
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => first_object(value).map(|object| JsonLd::from_value(&object)),
            Err(e) => {
                debug!("Skipping unparsable JSON-LD block: {e}");
                None
            }
        }
    })
}

/// First node of a JSON-LD document, which may be an array or a `@graph`
fn first_object(value: Value) -> Option<Value> {
    match value {
        Value::Array(items) => items.into_iter().find_map(first_object),
        Value::Object(mut map) => match map.remove("@graph") {
            Some(graph) => first_object(graph),
            None => Some(Value::Object(map)),
        },
        _ => None,
    }
}

/// Leading four-digit year of a schema.org date
fn date_year(value: &Value) -> Option<String> {
    let text = scalar_text(value)?;
    let year = text.get(..4)?;
    year.chars()
        .all(|c| c.is_ascii_digit())
        .then(|| year.to_string())
}

/// Strings and numbers as text, anything else as absent
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A single node or an array of nodes
fn one_or_many(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other],
    }
}

fn people(value: Option<&Value>) -> Vec<Person> {
    one_or_many(value)
        .into_iter()
        .filter_map(|node| {
            let name = node.get("name").and_then(scalar_text)?;
            let url = node.get("sameAs").and_then(scalar_text);
            Some(Person { name, url })
        })
        .collect()
}

impl JsonLd {
    fn from_value(value: &Value) -> Self {
        let genre = match value.get("genre") {
            Some(Value::Array(items)) => {
                let labels: Vec<String> = items.iter().filter_map(scalar_text).collect();
                (!labels.is_empty()).then(|| labels.join(", "))
            }
            Some(other) => scalar_text(other),
            None => None,
        }
        .map(|genre| Descriptor::normalize(&genre))
        .filter(|genre| !genre.is_empty());

        let season_number = value
            .get("partOfSeason")
            .and_then(|season| season.get("seasonNumber"))
            .and_then(scalar_text);

        let countries = one_or_many(value.get("countryOfOrigin"))
            .into_iter()
            .filter_map(|country| country.get("name").and_then(scalar_text))
            .collect();

        let release_date = ["datePublished", "dateCreated"]
            .into_iter()
            .find_map(|key| value.get(key).and_then(date_year));

        Self {
            genre,
            episode_number: value.get("episodeNumber").and_then(scalar_text),
            season_number,
            release_date,
            countries,
            actors: people(value.get("actor")),
            directors: people(value.get("director")),
            producers: people(value.get("producer")),
            composers: people(value.get("musicBy")),
        }
    }
}

fn extract_open_graph(document: &Html) -> OpenGraph {
    let mut og = OpenGraph::default();
    for meta in document.select(&META_SELECTOR) {
        let element = meta.value();
        let (Some(property), Some(content)) = (element.attr("property"), element.attr("content"))
        else {
            continue;
        };
        let content = content.trim();
        if content.is_empty() {
            continue;
        }
        match property.strip_prefix("og:").unwrap_or(property) {
            "video:duration" if og.duration.is_none() => og.duration = Some(content.to_string()),
            "video:release_date" if og.release_date.is_none() => {
                og.release_date = Some(content.to_string())
            }
            _ => {}
        }
    }
    og
}

fn extract_description(document: &Html) -> Option<String> {
    let div = document.select(&DESCRIPTION_SELECTOR).next()?;
    Some(build_description(
        div.text().map(str::trim).filter(|text| !text.is_empty()),
    ))
}

/// Join description text nodes with single spaces
///
/// The page may carry an episode section and a programme section; a blank
/// line is kept before the programme section heading when text precedes it.
pub fn build_description<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut description = String::new();
    for text in texts {
        if !description.is_empty() {
            if text == PROGRAMME_SECTION_HEADING {
                description.push_str("\n\n");
            } else {
                description.push(' ');
            }
        }
        description.push_str(text);
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><head>
<meta property="og:title" content="South Park">
<meta property="video:duration" content="25">
<meta property="video:release_date" content="1997">
<script type="application/ld+json">
{"@context": "https://schema.org", "@type": "TVEpisode",
 "genre": "animációs sorozat ",
 "episodeNumber": 2,
 "partOfSeason": {"@type": "TVSeason", "seasonNumber": "18"},
 "countryOfOrigin": [{"@type": "Country", "name": "amerikai"}],
 "director": {"@type": "Person", "name": "Trey Parker", "sameAs": "https://port.hu/adatlap/szemely/trey-parker/person-18931"},
 "actor": [{"@type": "Person", "name": "Matt Stone"}, {"@type": "Person", "name": ""}]}
</script>
</head><body>
<div class="description"><p><strong>Az aktuális rész ismertetője:</strong> Rövid.</p>
<p><strong>A műsor ismertetése:</strong> Hosszabb.</p></div>
</body></html>"#;

    #[test]
    fn test_extracts_all_sources() {
        let page = DetailPage::from_html("https://port.hu/adatlap/x", PAGE);

        let json_ld = page.json_ld.unwrap();
        assert_eq!(json_ld.genre.as_deref(), Some("animációs sorozat"));
        assert_eq!(json_ld.episode_number.as_deref(), Some("2"));
        assert_eq!(json_ld.season_number.as_deref(), Some("18"));
        assert_eq!(json_ld.countries, vec!["amerikai".to_string()]);
        assert_eq!(json_ld.directors.len(), 1);
        assert_eq!(
            json_ld.directors[0].url.as_deref(),
            Some("https://port.hu/adatlap/szemely/trey-parker/person-18931")
        );
        assert_eq!(
            json_ld.actors,
            vec![Person {
                name: "Matt Stone".to_string(),
                url: None
            }]
        );

        assert_eq!(page.open_graph.duration.as_deref(), Some("25"));
        assert_eq!(page.open_graph.release_date.as_deref(), Some("1997"));
        assert_eq!(
            page.description.as_deref(),
            Some("Az aktuális rész ismertetője: Rövid.\n\nA műsor ismertetése: Hosszabb.")
        );
    }

    #[rstest::rstest]
    #[case(r#"{"datePublished": "2008-12-25"}"#, Some("2008"))]
    #[case(r#"{"dateCreated": 1997}"#, Some("1997"))]
    #[case(r#"{"datePublished": "", "dateCreated": "2001-05"}"#, Some("2001"))]
    #[case(r#"{"datePublished": "tavaly"}"#, None)]
    #[case(r#"{}"#, None)]
    fn test_json_ld_release_year(#[case] json: &str, #[case] expected: Option<&str>) {
        let value: Value = serde_json::from_str(json).unwrap();
        assert_eq!(JsonLd::from_value(&value).release_date.as_deref(), expected);
    }

    #[test]
    fn test_description_needs_exact_class() {
        let html = r#"<html><body>
<div class="description foo">Ajánló.</div>
<div class="description">Leírás.</div>
</body></html>"#;
        let page = DetailPage::from_html("https://port.hu/adatlap/z", html);
        assert_eq!(page.description.as_deref(), Some("Leírás."));
    }

    #[test]
    fn test_graph_and_array_documents() {
        let graph = serde_json::json!({"@graph": [{"genre": "western"}]});
        assert_eq!(
            first_object(graph).and_then(|v| v.get("genre").cloned()),
            Some(Value::from("western"))
        );

        let array = serde_json::json!([[], {"genre": "krimi"}]);
        assert_eq!(
            first_object(array).and_then(|v| v.get("genre").cloned()),
            Some(Value::from("krimi"))
        );
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_page_without_metadata() {
        let page = DetailPage::from_html("https://port.hu/adatlap/y", "<html><body></body></html>");
        assert_eq!(page.json_ld, None);
        assert_eq!(page.open_graph, OpenGraph::default());
        assert_eq!(page.description, None);
        assert!(logs_contain("the description can't be found. url: https://port.hu/adatlap/y"));
    }

    #[test]
    fn test_description_heading_first() {
        assert_eq!(
            build_description(["A műsor ismertetése:", "Szöveg."]),
            "A műsor ismertetése: Szöveg."
        );
    }
}
