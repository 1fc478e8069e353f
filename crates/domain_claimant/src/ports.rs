//! Claimant domain ports
//!
//! Port traits for the two collaborators the workflow depends on, enabling
//! swappable implementations:
//!
//! - [`ClaimantStore`]: PostgreSQL adapter in `infra_db`, in-memory adapter
//!   in `test_utils`
//! - [`LicenceVerifier`]: reqwest adapter in [`crate::adapters::dvla`],
//!   scripted stub in `test_utils`
//!
//! The workflow service receives both as `Arc<dyn ...>` at construction, so
//! persistence technology and transport stay out of the domain.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::claimant::{Claimant, ClaimantUpdate, NewClaimant};
use crate::verification::{VerificationOutcome, VerificationRequest};

/// Exact-match lookup on a secondary claimant field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimantQuery {
    RefNo(String),
    Nino(String),
}

impl ClaimantQuery {
    /// The value being looked up.
    pub fn value(&self) -> &str {
        match self {
            ClaimantQuery::RefNo(v) | ClaimantQuery::Nino(v) => v,
        }
    }
}

/// Errors surfaced by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the id or query.
    #[error("claimant not found: {0}")]
    NotFound(String),

    /// The backing store failed (connection, query, serialization).
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(key: impl std::fmt::Display) -> Self {
        StoreError::NotFound(key.to_string())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }
}

/// Persistence port for claimant records.
///
/// All operations may suspend. Records are keyed by a store-assigned id;
/// `find_one` provides exact-equality lookup on `refNo` or `nino`. No
/// uniqueness is enforced on either secondary field.
#[async_trait]
pub trait ClaimantStore: Send + Sync {
    /// Every record in the store's natural order. No pagination.
    async fn find_all(&self) -> Result<Vec<Claimant>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Claimant, StoreError>;

    async fn find_one(&self, query: ClaimantQuery) -> Result<Claimant, StoreError>;

    /// Persists a validated claimant, assigning its id.
    async fn create(&self, claimant: NewClaimant) -> Result<Claimant, StoreError>;

    /// Applies a partial field merge by id, returning the updated record.
    async fn update_by_id(
        &self,
        id: Uuid,
        update: ClaimantUpdate,
    ) -> Result<Claimant, StoreError>;

    /// Removes a record by id, returning it. Deletion is terminal; there is
    /// no soft delete.
    async fn delete_by_id(&self, id: Uuid) -> Result<Claimant, StoreError>;

    /// Cheap liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Port for the external driving-licence verification service.
///
/// Implementations perform exactly one network call with no retries, and
/// convert every failure mode into a [`VerificationOutcome`] value rather
/// than an error, so callers can inspect the status uniformly. Timeout
/// semantics belong to the underlying transport and surface as
/// `ServiceFailure`.
#[async_trait]
pub trait LicenceVerifier: Send + Sync {
    async fn validate(&self, request: &VerificationRequest) -> VerificationOutcome;
}
