//! Claimant entity and payload types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A claimant record as held by the store.
///
/// `id` is store-assigned and immutable. `ref_no` functions as a secondary
/// lookup key; the store enforces no uniqueness on it. `driving_licence_no`
/// is verified against the external service at creation time only and never
/// re-verified on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claimant {
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

/// An unvalidated create payload.
///
/// Every field is optional here so that a missing field surfaces as a
/// validation error rather than a deserialization failure. Validation turns
/// this into a [`NewClaimant`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimant {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub post_code: Option<String>,
    pub ref_no: Option<String>,
    pub driving_licence_no: Option<String>,
    pub nino: Option<String>,
    /// Raw `YYYY-MM-DD` string; parsed during validation so a malformed
    /// date surfaces as a schema error naming the field.
    pub dob: Option<String>,
}

/// A validated claimant ready for persistence.
///
/// Produced only by [`crate::validation::validate_create`]; an empty-string
/// licence number has already been normalised to `None` by then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaimant {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub post_code: String,
    pub ref_no: String,
    pub driving_licence_no: Option<String>,
    pub nino: Option<String>,
    pub dob: NaiveDate,
}

impl NewClaimant {
    /// Attaches a store-assigned id, completing the record.
    pub fn into_claimant(self, id: Uuid) -> Claimant {
        Claimant {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            street: self.street,
            city: self.city,
            post_code: self.post_code,
            ref_no: self.ref_no,
            driving_licence_no: self.driving_licence_no,
            nino: self.nino,
            dob: self.dob,
        }
    }
}

/// A validated partial update.
///
/// Only the mutable subset of claimant fields appears here. `ref_no`, `id`,
/// `driving_licence_no`, `nino` and `dob` are immutable after creation;
/// update validation rejects any payload naming them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimantUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub post_code: Option<String>,
}

impl ClaimantUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.post_code.is_none()
    }

    /// Merges the set fields into an existing record.
    pub fn apply_to(&self, claimant: &mut Claimant) {
        if let Some(ref v) = self.first_name {
            claimant.first_name = v.clone();
        }
        if let Some(ref v) = self.last_name {
            claimant.last_name = v.clone();
        }
        if let Some(ref v) = self.street {
            claimant.street = v.clone();
        }
        if let Some(ref v) = self.city {
            claimant.city = v.clone();
        }
        if let Some(ref v) = self.post_code {
            claimant.post_code = v.clone();
        }
    }
}
