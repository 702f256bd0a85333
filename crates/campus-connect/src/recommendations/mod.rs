//! Deterministic recommendation scoring.
//!
//! A request normalizes the profile, derives the three need ratings once, scores every record
//! of one catalog, then ranks. Catalog snapshots are shared read-only; every scored record is a
//! per-request copy.

pub mod colleges;
pub mod events;
pub mod orgs;
pub mod profile;
pub mod ranking;
pub mod ratings;
pub mod records;
pub mod reference;
pub mod scored;
pub mod tutoring;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogSnapshot;

pub use colleges::{resolve_college, College, EventFocus};
pub use events::EventRecommendation;
pub use profile::{RawProfile, StudentProfile};
pub use ranking::TOP_RECOMMENDATIONS;
pub use ratings::DerivedRatings;
pub use records::{EventRecord, MajorEligibility, OrgRecord, TutoringRecord};
pub use scored::Scored;

/// Per-request inputs shared by every record of a scoring pass.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub profile: &'a StudentProfile,
    pub ratings: DerivedRatings,
    pub college: College,
}

impl<'a> ScoringContext<'a> {
    pub fn new(profile: &'a StudentProfile) -> Self {
        Self {
            profile,
            ratings: DerivedRatings::compute(profile),
            college: resolve_college(&profile.major),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "orgs")]
    Organizations,
    #[serde(rename = "events")]
    Events,
    #[serde(rename = "tutoring")]
    Tutoring,
}

impl Category {
    pub const fn ordered() -> [Self; 3] {
        [Self::Organizations, Self::Events, Self::Tutoring]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Organizations => "orgs",
            Self::Events => "events",
            Self::Tutoring => "tutoring",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = RecommendationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| RecommendationError::UnknownCategory(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    #[error("unknown recommendation category `{0}`")]
    UnknownCategory(String),
    #[error("{0} catalog is not loaded")]
    DataUnavailable(Category),
}

/// Ranked output for one category, serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Recommendations {
    Organizations(Vec<Scored<OrgRecord>>),
    Events(Vec<EventRecommendation>),
    Tutoring(Vec<Scored<TutoringRecord>>),
}

/// One printable line of a recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub title: String,
    pub score: f64,
    pub explanation: String,
}

impl Recommendations {
    pub fn category(&self) -> Category {
        match self {
            Self::Organizations(_) => Category::Organizations,
            Self::Events(_) => Category::Events,
            Self::Tutoring(_) => Category::Tutoring,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Organizations(items) => items.len(),
            Self::Events(items) => items.len(),
            Self::Tutoring(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn scores(&self) -> Vec<f64> {
        match self {
            Self::Organizations(items) => items.iter().map(|item| item.score).collect(),
            Self::Events(items) => items.iter().map(EventRecommendation::score).collect(),
            Self::Tutoring(items) => items.iter().map(|item| item.score).collect(),
        }
    }

    pub fn summaries(&self) -> Vec<RecommendationSummary> {
        match self {
            Self::Organizations(items) => items
                .iter()
                .map(|item| RecommendationSummary {
                    title: records::display_name(&item.record.details, &item.record.category)
                        .to_string(),
                    score: item.score,
                    explanation: item.explanation(),
                })
                .collect(),
            Self::Events(items) => items
                .iter()
                .map(|item| {
                    let fallback = if item.event_name.is_empty() {
                        item.scored.record.category.as_str()
                    } else {
                        item.event_name.as_str()
                    };
                    RecommendationSummary {
                        title: records::display_name(&item.scored.record.details, fallback)
                            .to_string(),
                        score: item.score(),
                        explanation: item.scored.explanation(),
                    }
                })
                .collect(),
            Self::Tutoring(items) => items
                .iter()
                .map(|item| RecommendationSummary {
                    title: records::display_name(&item.record.details, "Tutoring").to_string(),
                    score: item.score,
                    explanation: item.explanation(),
                })
                .collect(),
        }
    }
}

/// Stateless scorer applying the category rules and selection policy to a catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(TOP_RECOMMENDATIONS)
    }
}

impl RecommendationEngine {
    /// `limit` caps organization and event results; tutoring is filtered by score instead.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn recommend(
        &self,
        category: Category,
        profile: &StudentProfile,
        catalog: &CatalogSnapshot,
    ) -> Result<Recommendations, RecommendationError> {
        let context = ScoringContext::new(profile);
        debug!(
            category = category.label(),
            college = context.college.label(),
            social_support = context.ratings.social_support,
            intellectual_support = context.ratings.intellectual_support,
            career_development = context.ratings.career_development,
            "derived ratings"
        );

        let recommendations = match category {
            Category::Organizations => {
                let records = catalog
                    .organizations
                    .as_deref()
                    .ok_or(RecommendationError::DataUnavailable(category))?;
                let scored = orgs::score_organizations(&context, records);
                debug!(scored = scored.len(), "organizations scored");
                Recommendations::Organizations(ranking::top(scored, self.limit))
            }
            Category::Events => {
                let records = catalog
                    .events
                    .as_deref()
                    .ok_or(RecommendationError::DataUnavailable(category))?;
                let scored = events::score_events(&context, records);
                debug!(scored = scored.len(), "events scored");
                Recommendations::Events(
                    ranking::top(scored, self.limit)
                        .into_iter()
                        .map(EventRecommendation::enrich)
                        .collect(),
                )
            }
            Category::Tutoring => {
                let records = catalog
                    .tutoring
                    .as_deref()
                    .ok_or(RecommendationError::DataUnavailable(category))?;
                let scored = tutoring::score_tutoring(&context, records);
                debug!(scored = scored.len(), "tutoring scored");
                Recommendations::Tutoring(ranking::positive(scored))
            }
        };

        debug!(
            category = category.label(),
            returned = recommendations.len(),
            "recommendations ranked"
        );
        Ok(recommendations)
    }
}

/// Scores one category with the default selection policy.
pub fn score_category(
    category: Category,
    profile: &StudentProfile,
    catalog: &CatalogSnapshot,
) -> Result<Recommendations, RecommendationError> {
    RecommendationEngine::default().recommend(category, profile, catalog)
}
