//! Parsing of the listing's short free-text descriptor
//!
//! Descriptors look like `amerikai animációs sorozat, XVIII / 2. rész` or
//! `amerikai vígjáték, filmdráma, 2008`: an optional country, a genre list,
//! an optional roman season, an optional episode and an optional year.
//! Countries and genres cannot be told apart by position alone, so the
//! pattern match is followed by a dictionary-driven split.

use std::sync::LazyLock;

use regex::Regex;

use crate::categories::is_category;

const LETTERS: &str = "A-Za-zÁáÉéÍíÓóÖöŐőÚúÜüŰű";

static DESCRIPTOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:(?P<countries>[{LETTERS} -]+)?(?:(?: |^)(?P<categories>[{LETTERS}, -]+)(?:, (?:(?P<season>[IVXLCDM]+) / )?|$))?|(?P<bare_season>[IVXLCDM]+) / )(?:(?P<episode>[0-9]+)\. rész)?(?:, )?(?P<year>[0-9]{{4}})?$"
    );
    Regex::new(&pattern).expect("descriptor pattern is valid")
});

static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("roman numeral pattern is valid")
});

/// Fields captured from a descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    pub countries: Option<String>,
    pub categories: Option<String>,
    /// Season as written, usually a roman numeral
    pub season: Option<String>,
    pub episode: Option<String>,
    pub year: Option<String>,
}

impl Descriptor {
    /// Collapse the stray space the provider leaves before commas
    pub fn normalize(text: &str) -> String {
        text.replace(" , ", ", ").trim().to_string()
    }

    /// Parse an already normalized descriptor
    ///
    /// `None` when the text does not have the descriptor shape or matches
    /// only as an empty string.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = DESCRIPTOR_PATTERN.captures(text)?;
        if caps.get(0).is_none_or(|m| m.as_str().is_empty()) {
            return None;
        }

        let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
        let mut descriptor = Self {
            countries: group("countries"),
            categories: group("categories"),
            season: group("season").or_else(|| group("bare_season")),
            episode: group("episode"),
            year: group("year"),
        };
        descriptor.split_countries();
        Some(descriptor)
    }

    /// Whether any field was captured
    pub fn has_any(&self) -> bool {
        self.countries.is_some()
            || self.categories.is_some()
            || self.season.is_some()
            || self.episode.is_some()
            || self.year.is_some()
    }

    /// Move the trailing words of `countries` that form a genre together
    /// with the first category over to `categories`
    ///
    /// Candidates are tried longest first: all words, then all but the
    /// first, and so on. The first candidate whose concatenation with the
    /// category text starts with a known genre wins.
    fn split_countries(&mut self) {
        let Some(countries) = self.countries.as_deref() else {
            return;
        };
        let words: Vec<&str> = countries.split(' ').collect();
        let category_text = self.categories.as_deref().unwrap_or("");

        for i in 0..words.len() {
            let candidate = words[i..].join(" ");
            let combined = format!("{candidate} {category_text}");
            let first = combined.trim_end().split(", ").next().unwrap_or("");
            if is_category(first) {
                self.categories = Some(if self.categories.is_some() {
                    combined
                } else {
                    candidate
                });
                self.countries = Some(words[..i].join(" "));
                return;
            }
        }
    }
}

/// Value of a canonical roman numeral
pub fn roman_to_u32(numeral: &str) -> Option<u32> {
    if numeral.is_empty() || !ROMAN_NUMERAL.is_match(numeral) {
        return None;
    }

    let value = |c: char| match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    };

    let digits: Vec<u32> = numeral.chars().map(value).collect();
    let total = digits.iter().enumerate().fold(0i64, |acc, (i, &d)| {
        match digits.get(i + 1) {
            Some(&next) if next > d => acc - i64::from(d),
            _ => acc + i64::from(d),
        }
    });
    u32::try_from(total).ok()
}

fn positive(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Season from structured data, else from a roman or decimal descriptor value
pub fn resolve_season(structured: Option<&str>, descriptor: Option<&str>) -> Option<u32> {
    structured.and_then(positive).or_else(|| {
        descriptor.and_then(|season| {
            roman_to_u32(season)
                .filter(|n| *n > 0)
                .or_else(|| positive(season))
        })
    })
}

/// Episode from structured data, else from the descriptor
pub fn resolve_episode(structured: Option<&str>, descriptor: Option<&str>) -> Option<u32> {
    structured
        .and_then(positive)
        .or_else(|| descriptor.and_then(positive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parsed(text: &str) -> Descriptor {
        Descriptor::parse(&Descriptor::normalize(text)).unwrap()
    }

    #[rstest]
    #[case(
        "amerikai animációs sorozat, XVIII / 2. rész",
        Some("amerikai"),
        Some("animációs sorozat"),
        Some("XVIII"),
        Some("2"),
        None
    )]
    #[case(
        "venezuelai-amerikai-Puerto Rico-i filmsorozat, 230. rész",
        Some("venezuelai-amerikai-Puerto Rico-i"),
        Some("filmsorozat"),
        None,
        Some("230"),
        None
    )]
    #[case(
        "amerikai vígjáték, filmdráma, családi film, 2008",
        Some("amerikai"),
        Some("vígjáték, filmdráma, családi film"),
        None,
        None,
        Some("2008")
    )]
    #[case("talk show, I / 9. rész", Some(""), Some("talk show"), Some("I"), Some("9"), None)]
    #[case(
        "angol tévéfilmsorozat, IV / 15. rész",
        Some("angol"),
        Some("tévéfilmsorozat"),
        Some("IV"),
        Some("15"),
        None
    )]
    #[case(
        "török romantikus vígjáték , I / 13. rész",
        Some("török"),
        Some("romantikus vígjáték"),
        Some("I"),
        Some("13"),
        None
    )]
    fn test_descriptor_fields(
        #[case] text: &str,
        #[case] countries: Option<&str>,
        #[case] categories: Option<&str>,
        #[case] season: Option<&str>,
        #[case] episode: Option<&str>,
        #[case] year: Option<&str>,
    ) {
        let descriptor = parsed(text);
        assert_eq!(descriptor.countries.as_deref(), countries);
        assert_eq!(descriptor.categories.as_deref(), categories);
        assert_eq!(descriptor.season.as_deref(), season);
        assert_eq!(descriptor.episode.as_deref(), episode);
        assert_eq!(descriptor.year.as_deref(), year);
    }

    #[test]
    fn test_single_genre_moves_out_of_countries() {
        let descriptor = parsed("dokumentumfilm, III / 5. rész");
        assert_eq!(descriptor.countries, None);
        assert_eq!(descriptor.categories.as_deref(), Some("dokumentumfilm"));
        assert_eq!(descriptor.season.as_deref(), Some("III"));

        let film = parsed("film");
        assert_eq!(film.categories.as_deref(), Some("film"));
        assert_eq!(film.countries.as_deref(), Some(""));
    }

    #[test]
    fn test_non_descriptor_text() {
        assert_eq!(Descriptor::parse(""), None);
        assert_eq!(Descriptor::parse("A Duna (1962): 18 perc"), None);
    }

    #[rstest]
    #[case("I", Some(1))]
    #[case("IV", Some(4))]
    #[case("IX", Some(9))]
    #[case("XVIII", Some(18))]
    #[case("MCMXCIV", Some(1994))]
    #[case("IIII", None)]
    #[case("VX", None)]
    #[case("", None)]
    fn test_roman_numerals(#[case] numeral: &str, #[case] expected: Option<u32>) {
        assert_eq!(roman_to_u32(numeral), expected);
    }

    #[test]
    fn test_number_resolution() {
        assert_eq!(resolve_season(Some("3"), Some("XVIII")), Some(3));
        assert_eq!(resolve_season(None, Some("XVIII")), Some(18));
        assert_eq!(resolve_season(Some("0"), Some("II")), Some(2));
        assert_eq!(resolve_season(None, Some("IIII")), None);
        assert_eq!(resolve_episode(Some("x"), Some("230")), Some(230));
        assert_eq!(resolve_episode(None, None), None);
    }
}
