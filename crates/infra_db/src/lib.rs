//! Database Infrastructure
//!
//! PostgreSQL implementation of the claimant store port. The workflow only
//! ever sees the [`domain_claimant::ClaimantStore`] trait; this crate keeps
//! the persistence technology swappable.
//!
//! # Modules
//!
//! - `pool`: connection pool construction and migrations
//! - `repositories`: the claimant repository implementing the store port
//! - `error`: database error types

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations};
pub use repositories::PostgresClaimantStore;
