use campus_connect::catalog::CatalogStore;
use campus_connect::profiles::{ProfileRepository, RepositoryError};
use campus_connect::recommendations::{Category, RawProfile};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalogs: Arc<CatalogStore>,
}

/// Profile store backing the service until a persistent adapter is configured.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, RawProfile>>>,
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("profile store lock poisoned".to_string())
}

impl ProfileRepository for InMemoryProfileRepository {
    fn upsert(&self, email: &str, profile: RawProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.write().map_err(poisoned)?;
        guard.insert(email.to_string(), profile);
        Ok(())
    }

    fn update(&self, email: &str, profile: RawProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.write().map_err(poisoned)?;
        match guard.get_mut(email) {
            Some(stored) => {
                *stored = profile;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, email: &str) -> Result<Option<RawProfile>, RepositoryError> {
        let guard = self.profiles.read().map_err(poisoned)?;
        Ok(guard.get(email).cloned())
    }
}

pub(crate) fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse::<Category>().map_err(|err| {
        let expected = Category::ordered().map(Category::label).join(", ");
        format!("{err} (expected one of: {expected})")
    })
}
