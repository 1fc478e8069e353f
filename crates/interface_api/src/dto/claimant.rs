//! Claimant DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_claimant::{Claimant, CreateClaimant};

/// Create payload as received on the wire.
///
/// Every field is optional so that a missing one becomes a schema
/// validation error (400 with the field named) instead of a bare
/// deserialization failure. Unknown fields are ignored, not persisted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimantRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub post_code: Option<String>,
    pub ref_no: Option<String>,
    pub driving_licence_no: Option<String>,
    pub nino: Option<String>,
    /// Kept as a raw string so a malformed date is a schema validation
    /// error naming the field, not a deserialization failure.
    pub dob: Option<String>,
}

impl From<CreateClaimantRequest> for CreateClaimant {
    fn from(request: CreateClaimantRequest) -> Self {
        CreateClaimant {
            first_name: request.first_name,
            last_name: request.last_name,
            street: request.street,
            city: request.city,
            post_code: request.post_code,
            ref_no: request.ref_no,
            driving_licence_no: request.driving_licence_no,
            nino: request.nino,
            dob: request.dob,
        }
    }
}

/// Claimant as serialized on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimantResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub post_code: String,
    pub ref_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driving_licence_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nino: Option<String>,
    pub dob: NaiveDate,
}

impl From<Claimant> for ClaimantResponse {
    fn from(claimant: Claimant) -> Self {
        ClaimantResponse {
            id: claimant.id,
            first_name: claimant.first_name,
            last_name: claimant.last_name,
            street: claimant.street,
            city: claimant.city,
            post_code: claimant.post_code,
            ref_no: claimant.ref_no,
            driving_licence_no: claimant.driving_licence_no,
            nino: claimant.nino,
            dob: claimant.dob,
        }
    }
}
