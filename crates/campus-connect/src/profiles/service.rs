use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::repository::{ProfileRepository, RepositoryError};
use crate::catalog::{CatalogCounts, CatalogError, CatalogStore};
use crate::recommendations::reference::major_colors;
use crate::recommendations::{
    resolve_college, Category, RawProfile, RecommendationEngine, RecommendationError,
    Recommendations, StudentProfile,
};

/// Service composing the profile repository, the catalog store, and the recommendation engine.
pub struct RecommendationService<R> {
    repository: Arc<R>,
    catalogs: Arc<CatalogStore>,
    engine: RecommendationEngine,
}

/// Payload returned by the recommendations endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Recommendations,
    pub category: Category,
    pub major_colors: BTreeMap<&'static str, &'static str>,
    pub advising_link: &'static str,
}

impl<R> RecommendationService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalogs: Arc<CatalogStore>) -> Self {
        Self::with_engine(repository, catalogs, RecommendationEngine::default())
    }

    pub fn with_engine(
        repository: Arc<R>,
        catalogs: Arc<CatalogStore>,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            repository,
            catalogs,
            engine,
        }
    }

    pub fn catalogs(&self) -> &Arc<CatalogStore> {
        &self.catalogs
    }

    /// Store a new profile (or replace an existing one) and return its email key.
    pub fn signup(&self, mut profile: RawProfile) -> Result<String, ServiceError> {
        let email = require_email(profile.email.as_deref())?;
        profile.email = Some(email.clone());
        self.repository.upsert(&email, profile)?;
        info!(%email, "profile stored");
        Ok(email)
    }

    pub fn signin(&self, email: &str) -> Result<RawProfile, ServiceError> {
        self.profile(email)
    }

    pub fn profile(&self, email: &str) -> Result<RawProfile, ServiceError> {
        let email = require_email(Some(email))?;
        let profile = self
            .repository
            .fetch(&email)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }

    /// Replace an existing profile. The path email wins over any email in the body.
    pub fn update_profile(
        &self,
        email: &str,
        mut profile: RawProfile,
    ) -> Result<RawProfile, ServiceError> {
        let email = require_email(Some(email))?;
        profile.email = Some(email.clone());
        self.repository.update(&email, profile.clone())?;
        Ok(profile)
    }

    pub fn recommend(
        &self,
        email: &str,
        category: &str,
    ) -> Result<RecommendationResponse, ServiceError> {
        let category: Category = category.parse()?;
        let raw = self.profile(email)?;
        let profile = StudentProfile::normalize(&raw);
        let snapshot = self.catalogs.snapshot();

        let recommendations = self.engine.recommend(category, &profile, &snapshot)?;
        debug!(
            %email,
            category = category.label(),
            returned = recommendations.len(),
            "recommendations served"
        );

        Ok(RecommendationResponse {
            recommendations,
            category,
            major_colors: major_colors(),
            advising_link: resolve_college(&profile.major).advising_link(),
        })
    }

    pub fn reload_catalogs(&self) -> Result<CatalogCounts, ServiceError> {
        let counts = self.catalogs.reload()?;
        info!(
            orgs = ?counts.orgs,
            events = ?counts.events,
            tutoring = ?counts.tutoring,
            "catalogs reloaded"
        );
        Ok(counts)
    }
}

fn require_email(email: Option<&str>) -> Result<String, ServiceError> {
    email
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .ok_or(ServiceError::MissingEmail)
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("email is required")]
    MissingEmail,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
