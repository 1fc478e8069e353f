//! Claimant workflow service
//!
//! Orchestrates validation, conditional licence verification, and
//! persistence for every claimant operation. The create path is the core:
//! validate the payload, verify the licence with the external service only
//! when one is supplied, then persist. Each step is strictly ordered within
//! a request; nothing is shared between concurrent requests.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::claimant::{Claimant, CreateClaimant};
use crate::error::ClaimantError;
use crate::ports::{ClaimantQuery, ClaimantStore, LicenceVerifier, StoreError};
use crate::validation;
use crate::verification::{VerificationOutcome, VerificationRequest};

/// The claimant workflow.
///
/// Stateless apart from its two injected ports; cloning shares the
/// underlying store and verifier.
#[derive(Clone)]
pub struct ClaimantService {
    store: Arc<dyn ClaimantStore>,
    verifier: Arc<dyn LicenceVerifier>,
}

impl ClaimantService {
    pub fn new(store: Arc<dyn ClaimantStore>, verifier: Arc<dyn LicenceVerifier>) -> Self {
        Self { store, verifier }
    }

    /// Every claimant, in the store's natural order.
    pub async fn list(&self) -> Result<Vec<Claimant>, ClaimantError> {
        self.store.find_all().await.map_err(Self::store_error)
    }

    /// Fetches a claimant by id.
    ///
    /// A malformed id and a genuine miss both yield the same not-found
    /// outcome; neither is allowed to surface as a crash or a 500.
    pub async fn get(&self, id: &str) -> Result<Claimant, ClaimantError> {
        let claimant_id = Self::parse_id(id)?;
        match self.store.find_by_id(claimant_id).await {
            Ok(claimant) => Ok(claimant),
            Err(StoreError::NotFound(_)) => Err(ClaimantError::not_found_by_id(id)),
            Err(err) => Err(Self::store_error(err)),
        }
    }

    /// Exact-match lookup by reference number.
    pub async fn get_by_ref_no(&self, ref_no: &str) -> Result<Claimant, ClaimantError> {
        match self
            .store
            .find_one(ClaimantQuery::RefNo(ref_no.to_string()))
            .await
        {
            Ok(claimant) => Ok(claimant),
            Err(StoreError::NotFound(_)) => Err(ClaimantError::not_found_by_ref_no(ref_no)),
            Err(err) => Err(Self::store_error(err)),
        }
    }

    /// Exact-match lookup by National Insurance number.
    pub async fn get_by_nino(&self, nino: &str) -> Result<Claimant, ClaimantError> {
        match self
            .store
            .find_one(ClaimantQuery::Nino(nino.to_string()))
            .await
        {
            Ok(claimant) => Ok(claimant),
            Err(StoreError::NotFound(_)) => Err(ClaimantError::not_found_by_nino(nino)),
            Err(err) => Err(Self::store_error(err)),
        }
    }

    /// Creates a claimant: validate, verify the licence when present,
    /// persist.
    ///
    /// The verification gate is only crossed when a licence number was
    /// supplied, and its verdict is final: a rejection or an unreachable
    /// service aborts the create with the upstream's status and body, and
    /// the store is never touched.
    pub async fn create(&self, input: CreateClaimant) -> Result<Claimant, ClaimantError> {
        let candidate = validation::validate_create(input)?;

        if let Some(licence_no) = candidate.driving_licence_no.clone() {
            let request = VerificationRequest::for_claimant(&candidate, &licence_no);
            let outcome = self.verifier.validate(&request).await;
            let status = outcome.effective_status();
            match outcome {
                VerificationOutcome::Valid { message } => {
                    info!(ref_no = %candidate.ref_no, %message, "driving licence verified");
                }
                VerificationOutcome::Invalid { body, .. } => {
                    warn!(
                        ref_no = %candidate.ref_no,
                        status,
                        "driving licence rejected by verification service"
                    );
                    return Err(ClaimantError::LicenceRejected { status, body });
                }
                VerificationOutcome::ServiceFailure { body, .. } => {
                    warn!(
                        ref_no = %candidate.ref_no,
                        status,
                        "licence verification service unavailable"
                    );
                    return Err(ClaimantError::VerificationUnavailable { status, body });
                }
            }
        }

        let created = self
            .store
            .create(candidate)
            .await
            .map_err(Self::store_error)?;
        info!(id = %created.id, ref_no = %created.ref_no, "claimant created");
        Ok(created)
    }

    /// Validates an update payload against the restricted field subset and
    /// applies the partial merge by id.
    pub async fn update(&self, id: &str, payload: &Value) -> Result<Claimant, ClaimantError> {
        let update = validation::validate_update(payload)?;
        let claimant_id = Self::parse_id(id)?;

        match self.store.update_by_id(claimant_id, update).await {
            Ok(claimant) => {
                info!(id = %claimant.id, "claimant updated");
                Ok(claimant)
            }
            Err(StoreError::NotFound(_)) => Err(ClaimantError::not_found_by_id(id)),
            Err(err) => Err(Self::store_error(err)),
        }
    }

    /// Removes a claimant by id, returning the removed record.
    pub async fn delete(&self, id: &str) -> Result<Claimant, ClaimantError> {
        let claimant_id = Self::parse_id(id)?;
        match self.store.delete_by_id(claimant_id).await {
            Ok(claimant) => {
                info!(id = %claimant.id, "claimant deleted");
                Ok(claimant)
            }
            Err(StoreError::NotFound(_)) => Err(ClaimantError::not_found_by_id(id)),
            Err(err) => Err(Self::store_error(err)),
        }
    }

    /// Store liveness, for readiness probes.
    pub async fn ping_store(&self) -> Result<(), ClaimantError> {
        self.store.ping().await.map_err(Self::store_error)
    }

    // A malformed identifier is indistinguishable from a miss to callers.
    fn parse_id(id: &str) -> Result<Uuid, ClaimantError> {
        Uuid::parse_str(id).map_err(|_| ClaimantError::not_found_by_id(id))
    }

    fn store_error(err: StoreError) -> ClaimantError {
        match err {
            StoreError::NotFound(key) => {
                ClaimantError::NotFound(format!("Claimant matching {key} not found"))
            }
            StoreError::Backend(message) => ClaimantError::Store(message),
        }
    }
}
