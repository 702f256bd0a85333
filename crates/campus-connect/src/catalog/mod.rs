//! CSV catalog loading and the shared read-only snapshot the engine scores against.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::recommendations::{Category, EventRecord, OrgRecord, TutoringRecord};

pub use normalizer::interest_options;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Immutable catalogs for one process generation. `None` marks a category whose file was absent.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub organizations: Option<Arc<[OrgRecord]>>,
    pub events: Option<Arc<[EventRecord]>>,
    pub tutoring: Option<Arc<[TutoringRecord]>>,
}

/// Record counts per category; `None` when the category is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub orgs: Option<usize>,
    pub events: Option<usize>,
    pub tutoring: Option<usize>,
}

impl CatalogSnapshot {
    pub fn new(
        organizations: Option<Vec<OrgRecord>>,
        events: Option<Vec<EventRecord>>,
        tutoring: Option<Vec<TutoringRecord>>,
    ) -> Self {
        Self {
            organizations: organizations.map(Arc::from),
            events: events.map(Arc::from),
            tutoring: tutoring.map(Arc::from),
        }
    }

    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let organizations = load_optional(&config.orgs_path(), parser::organization)?;
        let events = load_optional(&config.events_path(), parser::event)?;
        let tutoring = load_optional(&config.tutoring_path(), parser::tutoring)?;
        let snapshot = Self::new(organizations, events, tutoring);

        let counts = snapshot.counts();
        info!(
            directory = %config.directory.display(),
            orgs = ?counts.orgs,
            events = ?counts.events,
            tutoring = ?counts.tutoring,
            "catalogs loaded"
        );
        Ok(snapshot)
    }

    pub fn organizations_from_reader<R: Read>(reader: R) -> Result<Vec<OrgRecord>, csv::Error> {
        records_from_reader(reader, parser::organization)
    }

    pub fn events_from_reader<R: Read>(reader: R) -> Result<Vec<EventRecord>, csv::Error> {
        records_from_reader(reader, parser::event)
    }

    pub fn tutoring_from_reader<R: Read>(reader: R) -> Result<Vec<TutoringRecord>, csv::Error> {
        records_from_reader(reader, parser::tutoring)
    }

    pub fn is_available(&self, category: Category) -> bool {
        match category {
            Category::Organizations => self.organizations.is_some(),
            Category::Events => self.events.is_some(),
            Category::Tutoring => self.tutoring.is_some(),
        }
    }

    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            orgs: self.organizations.as_ref().map(|records| records.len()),
            events: self.events.as_ref().map(|records| records.len()),
            tutoring: self.tutoring.as_ref().map(|records| records.len()),
        }
    }

    /// Empty when the organization catalog is unavailable.
    pub fn interest_options(&self) -> Vec<String> {
        self.organizations
            .as_deref()
            .map(interest_options)
            .unwrap_or_default()
    }
}

fn records_from_reader<R: Read, T>(
    reader: R,
    convert: fn(parser::Row) -> T,
) -> Result<Vec<T>, csv::Error> {
    Ok(parser::read_rows(reader)?.into_iter().map(convert).collect())
}

fn load_optional<T>(
    path: &Path,
    convert: fn(parser::Row) -> T,
) -> Result<Option<Vec<T>>, CatalogError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "catalog file missing; category unavailable");
            return Ok(None);
        }
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    records_from_reader(file, convert)
        .map(Some)
        .map_err(|source| CatalogError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Process-wide holder for the current snapshot. Readers clone the `Arc`; reload swaps it.
#[derive(Debug)]
pub struct CatalogStore {
    config: CatalogConfig,
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn load(config: CatalogConfig) -> Result<Self, CatalogError> {
        let snapshot = CatalogSnapshot::load(&config)?;
        Ok(Self::with_snapshot(config, snapshot))
    }

    pub fn with_snapshot(config: CatalogConfig, snapshot: CatalogSnapshot) -> Self {
        Self {
            config,
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Loads a fresh snapshot from disk. On error the previous snapshot stays in place.
    pub fn reload(&self) -> Result<CatalogCounts, CatalogError> {
        let snapshot = Arc::new(CatalogSnapshot::load(&self.config)?);
        let counts = snapshot.counts();
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
        Ok(counts)
    }
}
