//! Claimant handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::dto::claimant::{ClaimantResponse, CreateClaimantRequest};
use crate::{error::ApiError, AppState};

/// Lists every claimant
pub async fn list_claimants(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimantResponse>>, ApiError> {
    let claimants = state.claimants.list().await?;
    Ok(Json(
        claimants.into_iter().map(ClaimantResponse::from).collect(),
    ))
}

/// Gets a claimant by id
pub async fn get_claimant(
    State(state): State<AppState>,
    Path(claimant_id): Path<String>,
) -> Result<Json<ClaimantResponse>, ApiError> {
    let claimant = state.claimants.get(&claimant_id).await?;
    Ok(Json(claimant.into()))
}

/// Creates a claimant, verifying the driving licence when one is supplied
pub async fn create_claimant(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimantRequest>,
) -> Result<(StatusCode, Json<ClaimantResponse>), ApiError> {
    let created = state.claimants.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Applies a partial update to the mutable field subset
pub async fn update_claimant(
    State(state): State<AppState>,
    Path(claimant_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ApiError> {
    state.claimants.update(&claimant_id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a claimant, returning the removed record
pub async fn delete_claimant(
    State(state): State<AppState>,
    Path(claimant_id): Path<String>,
) -> Result<Json<ClaimantResponse>, ApiError> {
    let deleted = state.claimants.delete(&claimant_id).await?;
    Ok(Json(deleted.into()))
}

/// Gets a claimant by reference number
pub async fn get_claimant_by_ref_no(
    State(state): State<AppState>,
    Path(ref_no): Path<String>,
) -> Result<Json<ClaimantResponse>, ApiError> {
    let claimant = state.claimants.get_by_ref_no(&ref_no).await?;
    Ok(Json(claimant.into()))
}

/// Gets a claimant by National Insurance number
pub async fn get_claimant_by_nino(
    State(state): State<AppState>,
    Path(nino): Path<String>,
) -> Result<Json<ClaimantResponse>, ApiError> {
    let claimant = state.claimants.get_by_nino(&nino).await?;
    Ok(Json(claimant.into()))
}
