//! Mapping of provider genre labels to XMLTV categories
//!
//! Every label is looked up in the ETSI dictionary (an English and a
//! Hungarian category per hit). Independently the coarse rules are tried in
//! order against the whole label list and the first rule matching any label
//! decides the single MythTV-style category.

use std::sync::LazyLock;

use regex::Regex;
use strum::{AsRefStr, Display};
use tracing::warn;

use crate::models::Category;

pub mod catalog;

pub use catalog::{EtsiCategory, is_category, lookup};

/// Coarse classification understood by MythTV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CoarseCategory {
    Sports,
    Series,
    Movie,
    Tvshow,
}

static MOVIE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "film|dráma|kaland|romantikus|western|akció|krimi|thriller|misztikus|horror\
         |sci-fi|fantasy|vígjáték|kabaré|történel|komédia|comedy",
    )
    .expect("movie pattern is valid")
});

impl CoarseCategory {
    /// Rules in evaluation order, the first match wins
    const RULES: [CoarseCategory; 4] = [Self::Sports, Self::Series, Self::Movie, Self::Tvshow];

    fn matches(self, label: &str) -> bool {
        match self {
            Self::Sports => label.contains("sport"),
            Self::Series => label.contains("sorozat"),
            Self::Movie => !label.contains("sorozat") && MOVIE_PATTERN.is_match(label),
            Self::Tvshow => !label.is_empty(),
        }
    }

    /// Coarse category of a single label
    pub fn classify(label: &str) -> Option<Self> {
        Self::classify_all(&[label])
    }

    /// Coarse category of a label list, rule order before label order
    pub fn classify_all<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        Self::RULES.into_iter().find(|rule| {
            labels
                .iter()
                .any(|label| rule.matches(label.as_ref()))
        })
    }
}

/// Maps genre label lists to ordered XMLTV categories
pub struct CategoryMapper;

impl CategoryMapper {
    /// English ETSI entries, then Hungarian ones, then the coarse entry
    pub fn map<S: AsRef<str>>(labels: &[S]) -> Vec<Category> {
        let mut english = Vec::new();
        let mut hungarian = Vec::new();

        for label in labels.iter().map(AsRef::as_ref) {
            match lookup(label) {
                Some(category) => {
                    english.push(Category::new(category.english(), "en"));
                    hungarian.push(Category::new(category.hungarian(), "hu"));
                }
                None => warn!("Unknown category: '{label}'"),
            }
        }

        let mut categories = english;
        categories.append(&mut hungarian);
        match CoarseCategory::classify_all(labels) {
            Some(coarse) => categories.push(Category::new(coarse.to_string(), "en")),
            None => warn!(
                "Mythtv category not matched. Categories: {:?}",
                labels.iter().map(AsRef::as_ref).collect::<Vec<_>>()
            ),
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sportműsor", CoarseCategory::Sports)]
    #[case("animációs sorozat", CoarseCategory::Series)]
    #[case("vígjátéksorozat", CoarseCategory::Series)]
    #[case("vígjáték", CoarseCategory::Movie)]
    #[case("tévéfilm", CoarseCategory::Movie)]
    #[case("kabaréshow", CoarseCategory::Movie)]
    #[case("talk show", CoarseCategory::Tvshow)]
    #[case("hírműsor", CoarseCategory::Tvshow)]
    fn test_coarse_rules(#[case] label: &str, #[case] expected: CoarseCategory) {
        assert_eq!(CoarseCategory::classify(label), Some(expected));
    }

    #[test]
    fn test_empty_label_has_no_coarse_category() {
        assert_eq!(CoarseCategory::classify(""), None);
    }

    #[test]
    fn test_output_order() {
        let categories = CategoryMapper::map(&["vígjáték", "filmdráma", "családi film"]);
        assert_eq!(
            categories,
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
    }

    #[test]
    fn test_series_wins_when_label_looks_like_both() {
        let categories = CategoryMapper::map(&["animációs sorozat"]);
        assert_eq!(categories.last(), Some(&Category::new("series", "en")));
    }

    #[rstest]
    #[case(&["vígjáték", "vígjátéksorozat"], "series")]
    #[case(&["vígjátéksorozat", "vígjáték"], "series")]
    #[case(&["animációs sorozat", "sportműsor"], "sports")]
    #[case(&["hírműsor", "sportműsor"], "sports")]
    #[case(&["hírműsor", "tévéfilm"], "movie")]
    fn test_rule_order_decides_mixed_label_lists(#[case] labels: &[&str], #[case] expected: &str) {
        let categories = CategoryMapper::map(labels);
        assert_eq!(categories.last(), Some(&Category::new(expected, "en")));
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_unknown_label_is_warned_and_skipped() {
        let categories = CategoryMapper::map(&["űrvadász-opera"]);
        assert_eq!(categories, vec![Category::new("tvshow", "en")]);
        assert!(logs_contain("Unknown category: 'űrvadász-opera'"));
    }
}
