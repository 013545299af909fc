//! Channel id and URL conventions of port.hu
//!
//! port.hu addresses channels as `tvchannel-<n>` / `radiochannel-<n>` while
//! XMLTV output uses `<n>.port.hu` / `<n>.radio.port.hu`. Programme entries
//! carry event ids (`event-tv-<ts>-<n>`) that only embed the numeric part.

use std::sync::LazyLock;

use url::Url;

use super::BASE_URL;

const XMLTV_SUFFIX: &str = ".port.hu";
const XMLTV_RADIO_SUFFIX: &str = ".radio.port.hu";

const PROVIDER_TV_PREFIX: &str = "tvchannel-";
const PROVIDER_RADIO_PREFIX: &str = "radiochannel-";

/// Convert a provider channel id to an XMLTV channel id
///
/// `tvchannel-123` becomes `123.port.hu` and `radiochannel-123` becomes
/// `123.radio.port.hu`. Ids without a known prefix are treated as TV.
pub fn provider_to_xmltv(provider_id: &str) -> String {
    if let Some(number) = provider_id.strip_prefix(PROVIDER_RADIO_PREFIX) {
        return format!("{number}{XMLTV_RADIO_SUFFIX}");
    }

    let number = provider_id
        .strip_prefix(PROVIDER_TV_PREFIX)
        .unwrap_or(provider_id);
    format!("{number}{XMLTV_SUFFIX}")
}

/// Convert an XMLTV channel id back to the provider form
pub fn xmltv_to_provider(xmltv_id: &str) -> String {
    if let Some(number) = xmltv_id.strip_suffix(XMLTV_RADIO_SUFFIX) {
        return format!("{PROVIDER_RADIO_PREFIX}{number}");
    }

    let number = xmltv_id.strip_suffix(XMLTV_SUFFIX).unwrap_or(xmltv_id);
    format!("{PROVIDER_TV_PREFIX}{number}")
}

/// Convert a TV event id to the XMLTV id of its channel
///
/// `event-tv-1159526715-194` becomes `194.port.hu`. Radio event ids are not
/// supported by the provider API in the same shape.
pub fn event_to_xmltv(event_id: &str) -> String {
    let number = event_id
        .rsplit_once('-')
        .map_or(event_id, |(_, number)| number);
    format!("{number}{XMLTV_SUFFIX}")
}

static BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(BASE_URL).expect("provider base URL is valid"));

/// Resolve a port.hu URL against the site root, absolute URLs pass through
pub fn to_absolute_url(url: &str) -> String {
    match BASE.join(url) {
        Ok(joined) => joined.into(),
        Err(_) => url.to_string(),
    }
}

/// Point an SVG age-limit icon at its PNG rendition
///
/// Rasterised icons live next to the vector ones under `raster/`.
pub fn to_raster_image(icon: &str) -> String {
    if icon.ends_with(".svg") {
        icon.replace("vector", "raster").replace(".svg", ".png")
    } else {
        icon.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tv_and_radio_ids() {
        assert_eq!(provider_to_xmltv("tvchannel-5"), "5.port.hu");
        assert_eq!(provider_to_xmltv("radiochannel-12"), "12.radio.port.hu");
        assert_eq!(xmltv_to_provider("5.port.hu"), "tvchannel-5");
        assert_eq!(xmltv_to_provider("12.radio.port.hu"), "radiochannel-12");
    }

    #[test]
    fn test_event_id_to_channel() {
        assert_eq!(event_to_xmltv("event-tv-1159526715-194"), "194.port.hu");
        assert_eq!(event_to_xmltv("event-tv-1156778488-9"), "9.port.hu");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            to_absolute_url("/adatlap/film/tv/x/event-tv-1-6/movie-1"),
            "https://port.hu/adatlap/film/tv/x/event-tv-1-6/movie-1"
        );
        assert_eq!(
            to_absolute_url("https://media.port.hu/images/1.jpg"),
            "https://media.port.hu/images/1.jpg"
        );
    }

    #[test]
    fn test_raster_image() {
        assert_eq!(
            to_absolute_url(&to_raster_image(
                "/img/agelimit/vector/18_age_icon_black.svg"
            )),
            "https://port.hu/img/agelimit/raster/18_age_icon_black.png"
        );
        assert_eq!(to_raster_image("/img/a.png"), "/img/a.png");
    }

    proptest! {
        #[test]
        fn tv_id_conversion_is_a_bijection(n in 1u32..1_000_000) {
            let provider = format!("tvchannel-{n}");
            let xmltv = format!("{n}.port.hu");
            prop_assert_eq!(xmltv_to_provider(&provider_to_xmltv(&provider)), provider.clone());
            prop_assert_eq!(provider_to_xmltv(&xmltv_to_provider(&xmltv)), xmltv);
        }

        #[test]
        fn radio_id_conversion_is_a_bijection(n in 1u32..1_000_000) {
            let provider = format!("radiochannel-{n}");
            let xmltv = format!("{n}.radio.port.hu");
            prop_assert_eq!(xmltv_to_provider(&provider_to_xmltv(&provider)), provider.clone());
            prop_assert_eq!(provider_to_xmltv(&xmltv_to_provider(&xmltv)), xmltv);
        }
    }
}
