use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Profile document as submitted by the client and kept by the profile store.
///
/// Every field is optional and loosely typed: numbers and booleans are accepted where text is
/// expected, and list fields accept either a JSON array or a comma separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default, deserialize_with = "loose_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub ftcs_status: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub gpa_range: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "loose_list")]
    pub interests: Option<Vec<String>>,
    #[serde(default, deserialize_with = "loose_text")]
    pub stress_level: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub self_efficacy: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub satisfaction: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub academic_difficulty: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub financial_factors: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub family_responsibilities: Option<String>,
    #[serde(default, deserialize_with = "loose_list")]
    pub outside_encouragement: Option<Vec<String>>,
    #[serde(default, deserialize_with = "loose_text")]
    pub educational_goals: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub race_ethnicity: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub working_hours: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub high_school_grades: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub opportunity_to_transfer: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub current_gpa: Option<String>,
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn loose_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    Value::Number(number) => Some(number.to_string()),
                    _ => None,
                })
                .collect(),
        ),
        Some(Value::String(text)) => Some(text.split(',').map(str::to_string).collect()),
        _ => None,
    })
}

/// Lowercased, whitespace-free key so `"< 2.0"` and `"<2.0"` land on the same bucket.
fn canonical_key(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Year {
    #[default]
    First,
    Second,
    Third,
    Fourth,
    FifthPlus,
}

impl Year {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "1" => Some(Self::First),
            "2" => Some(Self::Second),
            "3" => Some(Self::Third),
            "4" => Some(Self::Fourth),
            "5" | "5+" => Some(Self::FifthPlus),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::FifthPlus => "5+",
        }
    }

    pub const fn is_upper_year(self) -> bool {
        matches!(self, Self::Third | Self::Fourth | Self::FifthPlus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GpaRange {
    #[default]
    Below2_0,
    From2_0To2_5,
    From2_6To3_0,
    From3_1To3_5,
    From3_6To4_0,
}

impl GpaRange {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "<2.0" | "below2.0" => Some(Self::Below2_0),
            "2.0-2.5" => Some(Self::From2_0To2_5),
            "2.6-3.0" => Some(Self::From2_6To3_0),
            "3.1-3.5" => Some(Self::From3_1To3_5),
            "3.6-4.0" | ">3.5" => Some(Self::From3_6To4_0),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Below2_0 => "<2.0",
            Self::From2_0To2_5 => "2.0 - 2.5",
            Self::From2_6To3_0 => "2.6 - 3.0",
            Self::From3_1To3_5 => "3.1 - 3.5",
            Self::From3_6To4_0 => "3.6 - 4.0",
        }
    }

    /// Both buckets at or below 2.5.
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Below2_0 | Self::From2_0To2_5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AcademicDifficulty {
    Easy,
    #[default]
    Moderate,
    Difficult,
}

impl AcademicDifficulty {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "easy" => Some(Self::Easy),
            "moderate" => Some(Self::Moderate),
            "difficult" => Some(Self::Difficult),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StressLevel {
    #[default]
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SelfEfficacy {
    LittleBelief,
    SomeBelief,
    #[default]
    Moderate,
    StrongBelief,
}

impl SelfEfficacy {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "littlebelief" => Some(Self::LittleBelief),
            "somebelief" => Some(Self::SomeBelief),
            "moderate" => Some(Self::Moderate),
            "strongbelief" => Some(Self::StrongBelief),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Satisfaction {
    Dissatisfied,
    #[default]
    Neutral,
    Satisfied,
}

impl Satisfaction {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "dissatisfied" => Some(Self::Dissatisfied),
            "neutral" => Some(Self::Neutral),
            "satisfied" => Some(Self::Satisfied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FinancialFactors {
    WorkIncome,
    Loan,
    Scholarship,
    FamilySupport,
    #[default]
    NotApplicable,
}

impl FinancialFactors {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "workincome" => Some(Self::WorkIncome),
            "loan" => Some(Self::Loan),
            "scholarship" => Some(Self::Scholarship),
            "familysupport" => Some(Self::FamilySupport),
            "n/a" => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FamilyResponsibilities {
    Low,
    Moderate,
    High,
    #[default]
    NotApplicable,
}

impl FamilyResponsibilities {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "n/a" => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

/// Outside sources of encouragement that lower a derived need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Encouragement {
    Peers,
    Community,
    Teachers,
    Family,
}

impl Encouragement {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "peers" => Some(Self::Peers),
            "community" => Some(Self::Community),
            "teachers" => Some(Self::Teachers),
            "family" => Some(Self::Family),
            _ => None,
        }
    }
}

pub const UNDECLARED_MAJOR: &str = "Undeclared";
const UNKNOWN: &str = "Unknown";

/// Canonical, immutable profile consumed by every scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub name: String,
    pub surname: String,
    pub school_name: String,
    pub year: Year,
    pub ftcs_status: bool,
    pub gpa_range: GpaRange,
    pub major: String,
    pub interests: BTreeSet<String>,
    pub stress_level: StressLevel,
    pub self_efficacy: SelfEfficacy,
    pub satisfaction: Satisfaction,
    pub academic_difficulty: AcademicDifficulty,
    pub financial_factors: FinancialFactors,
    pub family_responsibilities: FamilyResponsibilities,
    pub outside_encouragement: BTreeSet<Encouragement>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self::normalize(&RawProfile::default())
    }
}

impl StudentProfile {
    /// Applies the default table to every absent or unrecognised field. Never fails.
    pub fn normalize(raw: &RawProfile) -> Self {
        Self {
            name: text_or(&raw.name, UNKNOWN),
            surname: text_or(&raw.surname, UNKNOWN),
            school_name: text_or(&raw.school_name, UNKNOWN),
            year: parsed(&raw.year, Year::parse),
            ftcs_status: raw.ftcs_status.as_deref().is_some_and(is_truthy),
            gpa_range: parsed(&raw.gpa_range, GpaRange::parse),
            major: text_or(&raw.major, UNDECLARED_MAJOR),
            interests: raw
                .interests
                .iter()
                .flatten()
                .map(|interest| interest.trim())
                .filter(|interest| !interest.is_empty())
                .map(str::to_string)
                .collect(),
            stress_level: parsed(&raw.stress_level, StressLevel::parse),
            self_efficacy: parsed(&raw.self_efficacy, SelfEfficacy::parse),
            satisfaction: parsed(&raw.satisfaction, Satisfaction::parse),
            academic_difficulty: parsed(&raw.academic_difficulty, AcademicDifficulty::parse),
            financial_factors: parsed(&raw.financial_factors, FinancialFactors::parse),
            family_responsibilities: parsed(
                &raw.family_responsibilities,
                FamilyResponsibilities::parse,
            ),
            outside_encouragement: raw
                .outside_encouragement
                .iter()
                .flatten()
                .filter_map(|source| Encouragement::parse(source))
                .collect(),
        }
    }

    pub fn encouraged_by(&self, source: Encouragement) -> bool {
        self.outside_encouragement.contains(&source)
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn parsed<T: Default>(value: &Option<String>, parse: fn(&str) -> Option<T>) -> T {
    value.as_deref().and_then(parse).unwrap_or_default()
}

/// Any non-blank flag counts unless it spells a negative.
fn is_truthy(raw: &str) -> bool {
    let key = canonical_key(raw);
    !key.is_empty() && !matches!(key.as_str(), "no" | "false" | "0")
}
