use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use url::Url;

use super::profile::Year;
use super::records::EventRecord;
use super::scored::{Scored, Tally};
use super::ScoringContext;

pub const FIRST_YEAR_NETWORK: &str = "Social events can help first-year students build a network and feel more connected to the campus community.";
pub const ACADEMIC_GROWTH: &str =
    "With a GPA below 2.5, tutoring is highly recommended to support your academic growth.";
pub const CAREER_PREPARATION: &str = "As a 3rd, 4th, or 5th-year student, career development opportunities can help you prepare for post-graduation goals.";
pub const FTC_INTEGRATION: &str = "As an FTC student, social events can help you integrate and feel more connected to the community.";

pub const TIME_NOT_FOUND: &str = "Time Not Found";
const DISPLAY_FORMAT: &str = "%A, %B %d, %Y, %I:%M %p";

/// Scored event plus the display fields derived after scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecommendation {
    #[serde(flatten)]
    pub scored: Scored<EventRecord>,
    #[serde(rename = "Formatted Start Time")]
    pub formatted_start_time: String,
    #[serde(rename = "Formatted End Time")]
    pub formatted_end_time: String,
    #[serde(rename = "Event Name")]
    pub event_name: String,
}

impl EventRecommendation {
    pub fn enrich(scored: Scored<EventRecord>) -> Self {
        let formatted_start_time = format_event_time(scored.record.start_time.as_deref());
        let formatted_end_time = format_event_time(scored.record.end_time.as_deref());
        let event_name = scored
            .record
            .url
            .as_deref()
            .map(extract_event_name)
            .unwrap_or_default();

        Self {
            scored,
            formatted_start_time,
            formatted_end_time,
            event_name,
        }
    }

    pub fn score(&self) -> f64 {
        self.scored.score
    }
}

pub fn score_events(
    context: &ScoringContext<'_>,
    catalog: &[EventRecord],
) -> Vec<Scored<EventRecord>> {
    catalog
        .iter()
        .map(|record| score_event(context, record))
        .collect()
}

/// Event rules depend only on the profile, so every event in a catalog scores the same.
pub fn score_event(context: &ScoringContext<'_>, record: &EventRecord) -> Scored<EventRecord> {
    let profile = context.profile;
    let ratings = &context.ratings;
    let mut tally = Tally::default();

    if profile.year == Year::First {
        tally.add(ratings.social_share(), FIRST_YEAR_NETWORK);
    }

    if profile.gpa_range.is_low() {
        tally.add(ratings.intellectual_share(), ACADEMIC_GROWTH);
    }

    if profile.year.is_upper_year() {
        tally.add(ratings.career_share(), CAREER_PREPARATION);
    }

    if let Some(focus) = context.college.event_focus() {
        tally.add(
            1.0,
            format!(
                "Being in the {} makes this opportunity more relevant for {}.",
                context.college.label(),
                focus.label()
            ),
        );
    }

    if profile.ftcs_status {
        tally.add(1.0, FTC_INTEGRATION);
    }

    tally.finish(record.clone())
}

/// Renders an ISO-8601 timestamp for display. Blank input yields [`TIME_NOT_FOUND`]; input that
/// does not parse is returned unchanged.
pub fn format_event_time(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return TIME_NOT_FOUND.to_string();
    };

    match parse_iso_datetime(raw.trim()) {
        Some(timestamp) => timestamp.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Wall-clock time as written; offsets are honoured but not converted.
fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"] {
        if let Ok(timestamp) = DateTime::parse_from_str(value, format) {
            return Some(timestamp.naive_local());
        }
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Turns `https://host/event/fall-career-fair?x=1` into `Fall Career Fair`.
pub fn extract_event_name(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    match path.rsplit_once("/event/") {
        Some((_, slug)) => title_case(&slug.trim_end_matches('/').replace('-', " ")),
        None => String::new(),
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(ch);
            in_word = false;
        }
    }

    titled
}
