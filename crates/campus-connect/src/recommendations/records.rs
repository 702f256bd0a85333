use std::collections::BTreeMap;

use serde::Serialize;

/// Organization `Majors` value open to every student.
pub const ANY_MAJOR: &str = "any major";
/// Tutoring `Majors` value open to every student.
pub const ALL_MAJORS: &str = "All Majors";

/// Columns the scorers never read, kept verbatim for presentation.
pub type RecordDetails = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgRecord {
    #[serde(rename = "Category")]
    pub category: String,
    /// College name, or [`ANY_MAJOR`].
    #[serde(rename = "Majors")]
    pub majors: String,
    #[serde(rename = "Specific Majors")]
    pub specific_majors: Vec<String>,
    #[serde(flatten)]
    pub details: RecordDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Start Time")]
    pub start_time: Option<String>,
    #[serde(rename = "End Time")]
    pub end_time: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub details: RecordDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutoringRecord {
    #[serde(rename = "Majors")]
    pub majors: Option<String>,
    #[serde(skip)]
    pub eligibility: MajorEligibility,
    #[serde(flatten)]
    pub details: RecordDetails,
}

impl TutoringRecord {
    pub fn new(majors: Option<String>, details: RecordDetails) -> Self {
        let eligibility = MajorEligibility::parse(majors.as_deref());
        Self {
            majors,
            eligibility,
            details,
        }
    }
}

/// Parsed tutoring `Majors` column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MajorEligibility {
    #[default]
    AllMajors,
    Listed(Vec<String>),
}

impl MajorEligibility {
    /// Splits on `", "`. A blank or missing value is read as [`ALL_MAJORS`].
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::AllMajors;
        };

        let majors: Vec<String> = raw.split(", ").map(|major| major.trim().to_string()).collect();
        if majors.len() == 1 && majors[0] == ALL_MAJORS {
            Self::AllMajors
        } else {
            Self::Listed(majors)
        }
    }

    pub fn lists(&self, major: &str) -> bool {
        match self {
            Self::AllMajors => false,
            Self::Listed(majors) => majors.iter().any(|candidate| candidate == major),
        }
    }

    pub fn admits(&self, major: &str) -> bool {
        matches!(self, Self::AllMajors) || self.lists(major)
    }
}

/// Title used when printing a record outside of a template.
pub(crate) fn display_name<'a>(details: &'a RecordDetails, fallback: &'a str) -> &'a str {
    ["Name", "Title", "Organization", "Organization Name", "Subject", "Course"]
        .iter()
        .find_map(|key| details.get(*key))
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback)
}
