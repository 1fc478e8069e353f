//! Test Utilities Crate
//!
//! Shared test infrastructure for the claimant API test suite.
//!
//! # Modules
//!
//! - `store`: in-memory implementation of the claimant store port
//! - `verifier`: scripted licence verifier with invocation counting
//! - `builders`: builder for create payloads with sensible defaults

pub mod builders;
pub mod store;
pub mod verifier;

pub use builders::CreateClaimantBuilder;
pub use store::InMemoryClaimantStore;
pub use verifier::StubLicenceVerifier;
