//! HTTP API Layer
//!
//! This crate provides the REST API for the claimant records system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: login, claimant CRUD and lookups, health
//! - **Middleware**: bearer authentication, request audit logging
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent error responses; upstream verification
//!   errors are relayed with their own status and body
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claimant::{ClaimantService, ClaimantStore, LicenceVerifier};

use crate::auth::UserAccount;
use crate::config::ApiConfig;
use crate::handlers::{claimants, health, login};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claimants: ClaimantService,
    pub users: Arc<Vec<UserAccount>>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ClaimantStore>,
        verifier: Arc<dyn LicenceVerifier>,
        users: Vec<UserAccount>,
        config: ApiConfig,
    ) -> Self {
        Self {
            claimants: ClaimantService::new(store, verifier),
            users: Arc::new(users),
            config,
        }
    }
}

/// Creates the main API router
///
/// `/login` and the health endpoints are public; every `/claimants` route
/// sits behind the bearer-token middleware.
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/login", post(login::login));

    // Claimant routes, bearer-guarded
    let claimant_routes = Router::new()
        .route(
            "/",
            get(claimants::list_claimants).post(claimants::create_claimant),
        )
        .route(
            "/:id",
            get(claimants::get_claimant)
                .put(claimants::update_claimant)
                .delete(claimants::delete_claimant),
        )
        .route("/ref/:ref_no", get(claimants::get_claimant_by_ref_no))
        .route("/nino/:nino", get(claimants::get_claimant_by_nino))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/claimants", claimant_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
