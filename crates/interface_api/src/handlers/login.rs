//! Login handler

use axum::{extract::State, Json};
use tracing::warn;

use crate::auth;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::{error::ApiError, AppState};

/// Exchanges username/password for a bearer token.
///
/// Unknown users and wrong passwords both come back as 401; only the
/// message differs.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(username) = request.username else {
        return Err(ApiError::BadRequest("Username not provided".to_string()));
    };
    let Some(password) = request.password else {
        return Err(ApiError::BadRequest("Password not provided".to_string()));
    };

    let Some(user) = state.users.iter().find(|u| u.username == username) else {
        warn!(%username, "login attempt for unknown user");
        return Err(ApiError::Unauthorized("User not authorised".to_string()));
    };

    if !auth::verify_password(&password, &user.password_hash) {
        warn!(%username, "login attempt with wrong password");
        return Err(ApiError::Unauthorized(
            "Credentials provided do not match".to_string(),
        ));
    }

    let token = auth::create_token(
        &user.id.to_string(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
