//! Subtitle synthesis
//!
//! Format: `<episode title> - (<country> <genre>, <season>/<episode>. rész, <year>)`,
//! with every missing component and its separator left out.

/// Append the concatenation of `parts` to `base` with `sep` in between
///
/// When any part is missing or empty, `base` is returned unchanged; when
/// `base` is empty, the parts are returned without `sep`.
pub fn append_if_not_empty(base: Option<&str>, sep: &str, parts: &[Option<&str>]) -> String {
    let base = base.unwrap_or("");
    if parts.iter().any(|part| part.is_none_or(str::is_empty)) {
        return base.to_string();
    }

    let joined: String = parts.iter().flatten().copied().collect();
    if base.is_empty() {
        joined
    } else {
        format!("{base}{sep}{joined}")
    }
}

/// Components of a synthesized subtitle
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtitleParts<'a> {
    pub episode_title: Option<&'a str>,
    pub countries: Option<&'a str>,
    pub genre: Option<&'a str>,
    pub season: Option<&'a str>,
    pub episode: Option<&'a str>,
    pub release_date: Option<&'a str>,
}

impl SubtitleParts<'_> {
    pub fn build(&self) -> String {
        let mut details = append_if_not_empty(None, "", &[self.countries]);
        details = append_if_not_empty(Some(&details), " ", &[self.genre]);
        details = append_if_not_empty(Some(&details), ", ", &[self.season]);
        let episode_sep = if self.season.is_none_or(str::is_empty) {
            ", "
        } else {
            "/"
        };
        details = append_if_not_empty(Some(&details), episode_sep, &[self.episode, Some(". rész")]);
        details = append_if_not_empty(Some(&details), ", ", &[self.release_date]);

        let details = (!details.is_empty()).then(|| format!("({details})"));
        append_if_not_empty(self.episode_title, " - ", &[details.as_deref()])
    }
}

/// Pick the final subtitle
///
/// The structured subtitle wins unless the descriptor-based one is longer;
/// when both are shorter than the raw descriptor plus episode title, the
/// raw descriptor in parentheses is used instead. Lengths count characters.
pub fn choose_subtitle(
    structured: Option<String>,
    from_descriptor: Option<String>,
    short_description: Option<&str>,
    episode_title: Option<&str>,
) -> Option<String> {
    let chars = |s: Option<&str>| s.map_or(0, |s| s.chars().count());

    let structured_len = chars(structured.as_deref());
    let descriptor_len = chars(from_descriptor.as_deref());
    let raw_len = chars(short_description) + chars(episode_title);

    let subtitle = if structured_len < descriptor_len {
        from_descriptor
    } else if structured_len < raw_len {
        let wrapped = short_description
            .filter(|text| !text.is_empty())
            .map(|text| format!("({text})"));
        Some(append_if_not_empty(episode_title, " - ", &[wrapped.as_deref()]))
    } else {
        structured
    };

    subtitle.filter(|s| !s.is_empty())
}
