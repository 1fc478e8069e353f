//! Scripted licence verifier
//!
//! Returns a pre-programmed [`VerificationOutcome`] and counts invocations,
//! so tests can assert both the workflow's branching and that the
//! verification gate is only crossed when a licence number is present.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use domain_claimant::{LicenceVerifier, VerificationOutcome, VerificationRequest};

pub struct StubLicenceVerifier {
    outcome: VerificationOutcome,
    calls: AtomicUsize,
}

impl StubLicenceVerifier {
    pub fn new(outcome: VerificationOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Verifier that accepts every licence.
    pub fn valid() -> Self {
        Self::new(VerificationOutcome::Valid {
            message: "Driving Licence is valid".to_string(),
        })
    }

    /// Verifier that rejects every licence, mirroring the DVLA rejection
    /// body shape.
    pub fn invalid_licence() -> Self {
        Self::new(VerificationOutcome::Invalid {
            http_status: 400,
            body: json!({
                "httpStatus": 400,
                "status": 1,
                "message": "Driving Licence is invalid",
                "reason": "Driver details do not match licence number",
                "name": "InvalidDrivingLicence",
            }),
        })
    }

    /// Verifier simulating a transport timeout with no upstream status.
    pub fn timed_out() -> Self {
        Self::new(VerificationOutcome::ServiceFailure {
            http_status: None,
            body: json!({
                "name": "RequestError",
                "message": "Error: ETIMEDOUT",
            }),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LicenceVerifier for StubLicenceVerifier {
    async fn validate(&self, _request: &VerificationRequest) -> VerificationOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
