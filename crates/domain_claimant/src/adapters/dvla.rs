//! DVLA licence verification adapter
//!
//! HTTP implementation of the [`LicenceVerifier`] port. Sends the
//! verification payload to `POST {base_url}/{endpoint}` and classifies the
//! response by the `httpStatus` marker the service embeds in its JSON body:
//!
//! - 2xx response with body `httpStatus == 200` (or `status == 0`) →
//!   [`VerificationOutcome::Valid`]
//! - 4xx response, or a 4xx `httpStatus` in the body → `Invalid`, body kept
//!   verbatim
//! - anything else (timeout, connection failure, 5xx, unparseable body) →
//!   `ServiceFailure`
//!
//! The adapter makes exactly one request per call and never retries; the
//! per-request timeout configured here is the only timeout in the system,
//! and an expired one surfaces as a `ServiceFailure`, never a hang.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::ports::LicenceVerifier;
use crate::verification::{VerificationOutcome, VerificationRequest};

/// Configuration for the verification service connection
#[derive(Debug, Clone)]
pub struct LicenceServiceConfig {
    /// Base URL of the verification service (e.g. "https://dvla.example.com")
    pub base_url: String,
    /// Path of the validation endpoint (e.g. "dvla/validate")
    pub endpoint: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LicenceServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint: "dvla/validate".to_string(),
            timeout_secs: 10,
        }
    }
}

/// reqwest-backed client for the driving-licence verification service
#[derive(Debug, Clone)]
pub struct DvlaLicenceClient {
    client: reqwest::Client,
    config: LicenceServiceConfig,
}

impl DvlaLicenceClient {
    /// Creates a client with connection pooling and the configured timeout.
    pub fn new(config: LicenceServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.endpoint.trim_start_matches('/')
        )
    }

    /// Classifies a parsed response body against the transport status.
    fn classify(status: reqwest::StatusCode, body: Value) -> VerificationOutcome {
        let body_status = body
            .get("httpStatus")
            .and_then(Value::as_u64)
            .map(|s| s as u16);
        let status_marker = body.get("status").and_then(Value::as_i64);

        if status.is_success() && (body_status == Some(200) || status_marker == Some(0)) {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Driving licence is valid")
                .to_string();
            return VerificationOutcome::Valid { message };
        }

        // The service reports its own verdict inside the body; prefer that
        // over the transport status when both are present.
        let effective = body_status.unwrap_or(status.as_u16());
        if (400..500).contains(&effective) {
            return VerificationOutcome::Invalid {
                http_status: effective,
                body,
            };
        }

        if effective >= 500 {
            return VerificationOutcome::ServiceFailure {
                http_status: Some(effective),
                body,
            };
        }

        // 2xx transport with a body we cannot interpret; let the caller
        // apply its service-unavailable default.
        VerificationOutcome::ServiceFailure {
            http_status: None,
            body,
        }
    }
}

#[async_trait]
impl LicenceVerifier for DvlaLicenceClient {
    async fn validate(&self, request: &VerificationRequest) -> VerificationOutcome {
        let url = self.endpoint_url();
        debug!(%url, licence_no = %request.driving_licence_no, "calling licence verification service");

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(%url, error = %err, "licence verification request failed");
                return VerificationOutcome::ServiceFailure {
                    http_status: None,
                    body: json!({
                        "name": "RequestError",
                        "message": err.to_string(),
                    }),
                };
            }
        };

        let status = response.status();
        match response.json::<Value>().await {
            Ok(body) => Self::classify(status, body),
            Err(err) => {
                warn!(%url, error = %err, "licence verification response was not JSON");
                VerificationOutcome::ServiceFailure {
                    http_status: None,
                    body: json!({
                        "name": "MalformedResponse",
                        "message": err.to_string(),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LicenceServiceConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.endpoint, "dvla/validate");
    }

    #[test]
    fn endpoint_url_joins_without_duplicate_slashes() {
        let client = DvlaLicenceClient::new(LicenceServiceConfig {
            base_url: "https://dvla.example.com/".to_string(),
            endpoint: "/dvla/validate".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.endpoint_url(), "https://dvla.example.com/dvla/validate");
    }

    #[test]
    fn success_body_classifies_as_valid() {
        let body = json!({
            "httpStatus": 200,
            "status": 0,
            "message": "Driving Licence is valid",
        });
        let outcome = DvlaLicenceClient::classify(reqwest::StatusCode::OK, body);
        assert_eq!(
            outcome,
            VerificationOutcome::Valid {
                message: "Driving Licence is valid".to_string()
            }
        );
    }

    #[test]
    fn rejection_body_classifies_as_invalid_with_body_kept() {
        let body = json!({
            "httpStatus": 400,
            "status": 1,
            "message": "Driving Licence is invalid",
            "reason": "Driver details do not match licence number",
        });
        let outcome = DvlaLicenceClient::classify(reqwest::StatusCode::BAD_REQUEST, body.clone());
        assert_eq!(
            outcome,
            VerificationOutcome::Invalid {
                http_status: 400,
                body
            }
        );
    }

    #[test]
    fn body_verdict_wins_over_transport_status() {
        // Some gateways answer 200 while the body carries the rejection.
        let body = json!({"httpStatus": 400, "status": 1, "message": "invalid"});
        let outcome = DvlaLicenceClient::classify(reqwest::StatusCode::OK, body);
        assert!(matches!(
            outcome,
            VerificationOutcome::Invalid { http_status: 400, .. }
        ));
    }

    #[test]
    fn server_error_classifies_as_service_failure() {
        let body = json!({"message": "internal error"});
        let outcome =
            DvlaLicenceClient::classify(reqwest::StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(
            outcome,
            VerificationOutcome::ServiceFailure {
                http_status: Some(500),
                ..
            }
        ));
    }
}
