//! Test data builders

use domain_claimant::CreateClaimant;

/// Builder for create payloads with sensible defaults.
///
/// Defaults to a valid claimant without a driving licence; tests override
/// only the fields under scrutiny.
#[derive(Debug, Clone)]
pub struct CreateClaimantBuilder {
    input: CreateClaimant,
}

impl Default for CreateClaimantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateClaimantBuilder {
    pub fn new() -> Self {
        Self {
            input: CreateClaimant {
                first_name: Some("John".to_string()),
                last_name: Some("Doe".to_string()),
                street: Some("Test Street".to_string()),
                city: Some("Manchester".to_string()),
                post_code: Some("M3 4RF".to_string()),
                ref_no: Some("AS234567H".to_string()),
                driving_licence_no: None,
                nino: None,
                dob: Some("2011-10-31".to_string()),
            },
        }
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.input.first_name = Some(value.into());
        self
    }

    pub fn without_first_name(mut self) -> Self {
        self.input.first_name = None;
        self
    }

    pub fn with_ref_no(mut self, value: impl Into<String>) -> Self {
        self.input.ref_no = Some(value.into());
        self
    }

    pub fn with_driving_licence_no(mut self, value: impl Into<String>) -> Self {
        self.input.driving_licence_no = Some(value.into());
        self
    }

    pub fn with_nino(mut self, value: impl Into<String>) -> Self {
        self.input.nino = Some(value.into());
        self
    }

    pub fn with_post_code(mut self, value: impl Into<String>) -> Self {
        self.input.post_code = Some(value.into());
        self
    }

    pub fn with_dob(mut self, value: impl Into<String>) -> Self {
        self.input.dob = Some(value.into());
        self
    }

    pub fn build(self) -> CreateClaimant {
        self.input
    }

    /// The same payload as a JSON value, for HTTP-level tests.
    pub fn build_json(self) -> serde_json::Value {
        let input = self.input;
        let mut object = serde_json::Map::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(v) = value {
                object.insert(key.to_string(), serde_json::Value::String(v));
            }
        };
        put("firstName", input.first_name);
        put("lastName", input.last_name);
        put("street", input.street);
        put("city", input.city);
        put("postCode", input.post_code);
        put("refNo", input.ref_no);
        put("drivingLicenceNo", input.driving_licence_no);
        put("nino", input.nino);
        put("dob", input.dob);
        serde_json::Value::Object(object)
    }
}
