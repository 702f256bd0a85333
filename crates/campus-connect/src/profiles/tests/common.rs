use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{CatalogSnapshot, CatalogStore};
use crate::config::CatalogConfig;
use crate::profiles::repository::{ProfileRepository, RepositoryError};
use crate::profiles::{profile_router, RecommendationService};
use crate::recommendations::RawProfile;

pub(super) const ORGS_CSV: &str = "\
Name,Category,Majors,Specific Majors
Chess Club,Recreation,any major,[]
ACM,Academic Interests,Erik Jonsson School of Engineering and Computer Science,\"['Computer Science', 'Software Engineering']\"
Dance Team,Social,any major,[]
";

pub(super) const EVENTS_CSV: &str = "\
Category,Start Time,End Time,URL
Social,2024-09-05T14:30:00,2024-09-05T16:00:00,https://calendar.utdallas.edu/event/welcome-week
";

pub(super) const TUTORING_CSV: &str = "\
Subject,Majors
Calculus,All Majors
Circuits,\"Electrical Engineering, Computer Engineering\"
";

pub(super) fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot::new(
        Some(CatalogSnapshot::organizations_from_reader(Cursor::new(ORGS_CSV)).expect("orgs")),
        Some(CatalogSnapshot::events_from_reader(Cursor::new(EVENTS_CSV)).expect("events")),
        Some(CatalogSnapshot::tutoring_from_reader(Cursor::new(TUTORING_CSV)).expect("tutoring")),
    )
}

pub(super) fn store(snapshot: CatalogSnapshot) -> Arc<CatalogStore> {
    Arc::new(CatalogStore::with_snapshot(
        CatalogConfig::in_directory("does-not-exist"),
        snapshot,
    ))
}

pub(super) fn student(email: &str) -> RawProfile {
    RawProfile {
        email: Some(email.to_string()),
        name: Some("Temoc".to_string()),
        year: Some("1".to_string()),
        gpa_range: Some("2.0 - 2.5".to_string()),
        major: Some("Computer Science".to_string()),
        interests: Some(vec!["Social".to_string()]),
        academic_difficulty: Some("Difficult".to_string()),
        stress_level: Some("High".to_string()),
        satisfaction: Some("Dissatisfied".to_string()),
        ..RawProfile::default()
    }
}

pub(super) fn build_service(
    snapshot: CatalogSnapshot,
) -> (RecommendationService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = RecommendationService::new(repository.clone(), store(snapshot));
    (service, repository)
}

pub(super) fn router_with_service(service: RecommendationService<MemoryRepository>) -> axum::Router {
    profile_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) profiles: Arc<Mutex<HashMap<String, RawProfile>>>,
}

impl ProfileRepository for MemoryRepository {
    fn upsert(&self, email: &str, profile: RawProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        guard.insert(email.to_string(), profile);
        Ok(())
    }

    fn update(&self, email: &str, profile: RawProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        match guard.get_mut(email) {
            Some(stored) => {
                *stored = profile;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, email: &str) -> Result<Option<RawProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("repository mutex poisoned");
        Ok(guard.get(email).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn upsert(&self, _email: &str, _profile: RawProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _email: &str, _profile: RawProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _email: &str) -> Result<Option<RawProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
