use crate::recommendations::RawProfile;

/// Storage abstraction for submitted profiles, keyed by email.
pub trait ProfileRepository: Send + Sync {
    /// Inserts or replaces the profile stored under `email`.
    fn upsert(&self, email: &str, profile: RawProfile) -> Result<(), RepositoryError>;
    /// Replaces an existing profile; [`RepositoryError::NotFound`] when none is stored.
    fn update(&self, email: &str, profile: RawProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, email: &str) -> Result<Option<RawProfile>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
