//! Claimant domain errors

use serde_json::Value;
use thiserror::Error;

/// A single schema violation.
///
/// Validation is fail-fast, so a payload produces at most one of these: the
/// first field checked that breaks a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{field}\" {message}")]
pub struct ValidationError {
    /// The JSON field name as it appears on the wire (camelCase).
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }
}

/// Errors that can occur in the claimant workflow
#[derive(Debug, Error)]
pub enum ClaimantError {
    /// The payload failed schema validation; always client fault.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Id, ref-no, or NINO lookup missed. The message names the key.
    #[error("{0}")]
    NotFound(String),

    /// The verification service explicitly rejected the licence.
    ///
    /// `status` and `body` come from the upstream response and are surfaced
    /// verbatim to the caller.
    #[error("driving licence rejected by verification service")]
    LicenceRejected { status: u16, body: Value },

    /// The verification service could not be reached or returned an
    /// unexpected response. `status` defaults to 503 when the upstream gave
    /// none.
    #[error("licence verification service unavailable")]
    VerificationUnavailable { status: u16, body: Value },

    /// The store failed for a reason other than a missing record.
    #[error("store error: {0}")]
    Store(String),
}

impl ClaimantError {
    /// Not-found outcome for an id lookup. Malformed ids take the same shape
    /// as genuine misses.
    pub fn not_found_by_id(id: &str) -> Self {
        ClaimantError::NotFound(format!("Claimant matching ID {id} not found"))
    }

    pub fn not_found_by_ref_no(ref_no: &str) -> Self {
        ClaimantError::NotFound(format!("Claimant matching Ref No {ref_no} not found"))
    }

    pub fn not_found_by_nino(nino: &str) -> Self {
        ClaimantError::NotFound(format!("Claimant matching NINO {nino} not found"))
    }
}
