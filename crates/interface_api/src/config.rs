//! API configuration

use serde::Deserialize;

/// API configuration
///
/// An explicit struct injected into each collaborator at construction;
/// nothing reads configuration ad hoc at call sites.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Base URL of the driving licence verification service
    pub licence_service_url: String,
    /// Path of the validation endpoint on the verification service
    pub licence_service_endpoint: String,
    /// Per-request timeout for verification calls, in seconds
    pub licence_timeout_secs: u64,
    /// Username of the seeded API user
    pub auth_username: String,
    /// Password of the seeded API user (hashed at startup)
    pub auth_password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            database_url: "postgres://localhost/claimants".to_string(),
            log_level: "info".to_string(),
            licence_service_url: "http://localhost:3050".to_string(),
            licence_service_endpoint: "dvla/validate".to_string(),
            licence_timeout_secs: 10,
            auth_username: "admin".to_string(),
            auth_password: "change-me".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
