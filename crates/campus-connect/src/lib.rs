//! Campus Connect recommendation engine and service plumbing.
//!
//! The [`recommendations`] module holds the deterministic scoring rules. Everything else loads
//! catalogs, stores profiles, and exposes the engine over HTTP.

pub mod catalog;
pub mod config;
pub mod error;
pub mod profiles;
pub mod recommendations;
pub mod telemetry;
