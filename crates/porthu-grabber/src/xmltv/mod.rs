//! XMLTV document output
//!
//! Elements are written in the order the XMLTV DTD requires. The document is
//! checked for the fields the DTD makes mandatory before anything is written.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use quick_xml::escape::escape;
use tracing::{debug, error, info};

use crate::config::defaults::GRABBER_NAME;
use crate::errors::{AppError, AppResult};
use crate::models::{Channel, Guide, Person, Programme};
use crate::sources::porthu::HOST;

const TIME_FORMAT: &str = "%Y%m%d%H%M%S %z";
const LANG: &str = "hu";

/// Serializes a [`Guide`] as an XMLTV document
pub struct XmltvWriter;

impl XmltvWriter {
    /// Problems that make the document invalid against the DTD
    pub fn validate(guide: &Guide) -> Vec<String> {
        let mut problems = Vec::new();
        for (i, channel) in guide.channels.iter().enumerate() {
            if channel.id.is_empty() {
                problems.push(format!("Channel #{i} has no id"));
            }
            if channel.name.is_empty() {
                problems.push(format!("Channel '{}' has no display name", channel.id));
            }
        }
        for programme in &guide.programmes {
            let start = format_time(&programme.start);
            if programme.channel.is_empty() {
                problems.push(format!("Programme '{}' at {start} has no channel", programme.title));
            }
            if programme.title.is_empty() {
                problems.push(format!(
                    "Programme at {start} on channel '{}' has no title",
                    programme.channel
                ));
            }
        }
        problems
    }

    /// The complete document text
    pub fn render(guide: &Guide) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<!DOCTYPE tv SYSTEM \"xmltv.dtd\">\n");
        let _ = writeln!(xml, "<tv generator-info-name=\"{GRABBER_NAME}\">");
        for channel in &guide.channels {
            write_channel(&mut xml, channel);
        }
        for programme in &guide.programmes {
            write_programme(&mut xml, programme);
        }
        xml.push_str("</tv>\n");
        xml
    }

    /// Validate and write to `output`, or to stdout when `None`
    pub fn write(guide: &Guide, output: Option<&Path>) -> AppResult<()> {
        let problems = Self::validate(guide);
        if !problems.is_empty() {
            for problem in &problems {
                error!("Invalid XMLTV document: {problem}");
            }
            return Err(AppError::data_integrity(format!(
                "XMLTV document failed validation with {} problem(s)",
                problems.len()
            )));
        }

        let xml = Self::render(guide);
        match output {
            Some(path) => {
                std::fs::write(path, xml.as_bytes())?;
                info!(
                    "Wrote {} channel(s) and {} programme(s) to {}",
                    guide.channels.len(),
                    guide.programmes.len(),
                    path.display()
                );
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(xml.as_bytes())?;
                stdout.flush()?;
                debug!("Wrote XMLTV document to stdout");
            }
        }
        Ok(())
    }
}

fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn write_channel(xml: &mut String, channel: &Channel) {
    let _ = writeln!(xml, "  <channel id=\"{}\">", escape(&channel.id));
    let _ = writeln!(
        xml,
        "    <display-name lang=\"{LANG}\">{}</display-name>",
        escape(&channel.name)
    );
    if let Some(icon) = channel.icon.as_deref().filter(|icon| !icon.is_empty()) {
        let _ = writeln!(xml, "    <icon src=\"{}\" />", escape(icon));
    }
    if let Some(url) = channel.url.as_deref().filter(|url| !url.is_empty()) {
        let _ = writeln!(xml, "    <url>{}</url>", escape(url));
    }
    xml.push_str("  </channel>\n");
}

fn write_person(xml: &mut String, tag: &str, person: &Person) {
    match &person.url {
        Some(url) => {
            let _ = writeln!(
                xml,
                "      <{tag}>{}<url system=\"{HOST}\">{}</url></{tag}>",
                escape(&person.name),
                escape(url)
            );
        }
        None => {
            let _ = writeln!(xml, "      <{tag}>{}</{tag}>", escape(&person.name));
        }
    }
}

fn write_programme(xml: &mut String, programme: &Programme) {
    let _ = write!(xml, "  <programme start=\"{}\"", format_time(&programme.start));
    if let Some(stop) = &programme.stop {
        let _ = write!(xml, " stop=\"{}\"", format_time(stop));
    }
    let _ = writeln!(xml, " channel=\"{}\">", escape(&programme.channel));

    let _ = writeln!(xml, "    <title lang=\"{LANG}\">{}</title>", escape(&programme.title));
    if let Some(sub_title) = &programme.sub_title {
        let _ = writeln!(xml, "    <sub-title lang=\"{LANG}\">{}</sub-title>", escape(sub_title));
    }
    if let Some(description) = &programme.description {
        let _ = writeln!(xml, "    <desc lang=\"{LANG}\">{}</desc>", escape(description));
    }

    if let Some(credits) = programme.credits.as_ref().filter(|credits| !credits.is_empty()) {
        xml.push_str("    <credits>\n");
        for person in &credits.directors {
            write_person(xml, "director", person);
        }
        for person in &credits.actors {
            write_person(xml, "actor", person);
        }
        for person in &credits.producers {
            write_person(xml, "producer", person);
        }
        for person in &credits.composers {
            write_person(xml, "composer", person);
        }
        xml.push_str("    </credits>\n");
    }

    if let Some(date) = &programme.date {
        let _ = writeln!(xml, "    <date>{}</date>", escape(date));
    }
    for category in &programme.categories {
        let _ = writeln!(
            xml,
            "    <category lang=\"{}\">{}</category>",
            escape(&category.lang),
            escape(&category.name)
        );
    }
    if let Some(length) = &programme.length {
        let _ = writeln!(xml, "    <length units=\"minutes\">{}</length>", escape(length));
    }
    for url in &programme.urls {
        let _ = writeln!(xml, "    <url system=\"{HOST}\">{}</url>", escape(url));
    }
    if let Some(episode_num) = &programme.episode_num {
        let _ = writeln!(
            xml,
            "    <episode-num system=\"xmltv_ns\">{}</episode-num>",
            episode_num.xmltv_ns()
        );
    }
    if programme.previously_shown {
        xml.push_str("    <previously-shown />\n");
    }
    for rating in &programme.ratings {
        xml.push_str("    <rating>\n");
        let _ = writeln!(xml, "      <value>{}</value>", escape(&rating.value));
        if let Some(icon) = &rating.icon {
            let _ = writeln!(xml, "      <icon src=\"{}\" />", escape(icon));
        }
        xml.push_str("    </rating>\n");
    }
    xml.push_str("  </programme>\n");
}
