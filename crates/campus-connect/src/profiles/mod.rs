//! Profile storage seam, the service composing it with the engine, and its HTTP routes.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{ProfileRepository, RepositoryError};
pub use router::profile_router;
pub use service::{RecommendationResponse, RecommendationService, ServiceError};
