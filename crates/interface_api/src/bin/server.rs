//! Claimant Records API - Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claimants-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_DATABASE_URL=postgres://... cargo run --bin claimants-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_JWT_SECRET` - JWT signing secret (required in production)
//! * `API_JWT_EXPIRATION_SECS` - Token expiration in seconds (default: 3600)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LICENCE_SERVICE_URL` - Base URL of the licence verification service
//! * `API_LICENCE_SERVICE_ENDPOINT` - Validation endpoint path
//! * `API_LICENCE_TIMEOUT_SECS` - Verification request timeout (default: 10)
//! * `API_AUTH_USERNAME` / `API_AUTH_PASSWORD` - Seeded API user
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claimant::adapters::{DvlaLicenceClient, LicenceServiceConfig};
use infra_db::PostgresClaimantStore;
use interface_api::{auth::UserAccount, config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, connects to the database,
/// seeds the configured user, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Claimant Records API Server"
    );

    let pool = infra_db::create_pool(&config.database_url).await?;
    infra_db::run_migrations(&pool).await?;

    let store = Arc::new(PostgresClaimantStore::new(pool));
    let verifier = Arc::new(DvlaLicenceClient::new(LicenceServiceConfig {
        base_url: config.licence_service_url.clone(),
        endpoint: config.licence_service_endpoint.clone(),
        timeout_secs: config.licence_timeout_secs,
    })?);

    // Seed the configured API user, hashing its password at startup.
    let user = UserAccount::seed(&config.auth_username, &config.auth_password)
        .map_err(|e| anyhow::anyhow!("failed to seed user: {e}"))?;

    let state = AppState::new(store, verifier, vec![user], config.clone());
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual variables and then to defaults when the
/// prefixed source cannot be deserialized as a whole.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret: std::env::var("API_JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiration_secs: std::env::var("API_JWT_EXPIRATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.jwt_expiration_secs),
            database_url: std::env::var("DATABASE_URL")
                .or_else(|_| std::env::var("API_DATABASE_URL"))
                .unwrap_or(defaults.database_url),
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            licence_service_url: std::env::var("API_LICENCE_SERVICE_URL")
                .unwrap_or(defaults.licence_service_url),
            licence_service_endpoint: std::env::var("API_LICENCE_SERVICE_ENDPOINT")
                .unwrap_or(defaults.licence_service_endpoint),
            licence_timeout_secs: std::env::var("API_LICENCE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.licence_timeout_secs),
            auth_username: std::env::var("API_AUTH_USERNAME").unwrap_or(defaults.auth_username),
            auth_password: std::env::var("API_AUTH_PASSWORD").unwrap_or(defaults.auth_password),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
