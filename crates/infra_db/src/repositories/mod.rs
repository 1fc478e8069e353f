//! Database repositories

pub mod claimant;

pub use claimant::PostgresClaimantStore;
