//! Driving-licence verification contract
//!
//! The external service receives four fields and answers with a JSON body
//! carrying its own `httpStatus` / `status` markers. The contract here is
//! value-based: the verifier makes exactly one call and folds every failure
//! mode, transport errors included, into a [`VerificationOutcome`] so the
//! workflow can inspect the result uniformly instead of catching errors.

use serde::Serialize;
use serde_json::Value;

use crate::claimant::NewClaimant;

/// Status the workflow reports when the upstream supplied none.
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// The payload sent to the verification service.
///
/// Only these four fields ever leave the process; the rest of the claimant
/// record is withheld from the external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub first_name: String,
    pub last_name: String,
    pub driving_licence_no: String,
    pub dob: String,
}

impl VerificationRequest {
    /// Builds the verification payload for a validated claimant.
    ///
    /// Callers must only invoke this when a licence number is present; the
    /// workflow never verifies claimants without one.
    pub fn for_claimant(candidate: &NewClaimant, licence_no: &str) -> Self {
        Self {
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            driving_licence_no: licence_no.to_string(),
            dob: candidate.dob.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Result of a single verification call.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// The service confirmed the licence (`httpStatus` 200, `status` 0).
    Valid { message: String },

    /// The service explicitly rejected the licence. `body` is the upstream
    /// response verbatim, typically carrying `message` and `reason` fields.
    Invalid { http_status: u16, body: Value },

    /// Transport failure, unreachable host, timeout, or a response body the
    /// client could not interpret. `http_status` is whatever the upstream
    /// supplied, if anything.
    ServiceFailure {
        http_status: Option<u16>,
        body: Value,
    },
}

impl VerificationOutcome {
    /// The HTTP status the workflow should report for this outcome,
    /// defaulting to 503 when the upstream gave none.
    pub fn effective_status(&self) -> u16 {
        match self {
            VerificationOutcome::Valid { .. } => 200,
            VerificationOutcome::Invalid { http_status, .. } => *http_status,
            VerificationOutcome::ServiceFailure { http_status, .. } => {
                http_status.unwrap_or(SERVICE_UNAVAILABLE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn request_contains_only_the_four_verification_fields() {
        let candidate = NewClaimant {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            street: "Test Street".to_string(),
            city: "Manchester".to_string(),
            post_code: "M3 4RF".to_string(),
            ref_no: "AS234567H".to_string(),
            driving_licence_no: Some("ABCDE123456FG7HI8".to_string()),
            nino: None,
            dob: NaiveDate::from_ymd_opt(2011, 10, 31).unwrap(),
        };
        let request = VerificationRequest::for_claimant(&candidate, "ABCDE123456FG7HI8");
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["firstName"], "John");
        assert_eq!(object["drivingLicenceNo"], "ABCDE123456FG7HI8");
        assert_eq!(object["dob"], "2011-10-31");
        assert!(object.get("street").is_none());
    }

    #[test]
    fn service_failure_without_status_defaults_to_503() {
        let outcome = VerificationOutcome::ServiceFailure {
            http_status: None,
            body: json!({"message": "ETIMEDOUT"}),
        };
        assert_eq!(outcome.effective_status(), 503);
    }

    #[test]
    fn service_failure_keeps_upstream_status_when_present() {
        let outcome = VerificationOutcome::ServiceFailure {
            http_status: Some(500),
            body: json!({"message": "boom"}),
        };
        assert_eq!(outcome.effective_status(), 500);
    }
}
