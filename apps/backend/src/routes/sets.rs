//! Set endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/sets
pub async fn list(State(state): State<AppState>) -> Result<Json<SetListResponse>> {
    let store = state.store()?;
    Ok(Json(SetListResponse::from_library(store.library())))
}

/// POST /api/sets
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<SetNameRequest>,
) -> Result<(StatusCode, Json<SetListResponse>)> {
    let mut store = state.store()?;
    store.modify(|library| library.create(&request.name).map_err(ApiError::from))?;
    tracing::info!("Created set {:?}", request.name);
    Ok((
        StatusCode::CREATED,
        Json(SetListResponse::from_library(store.library())),
    ))
}

/// PUT /api/current-set
pub async fn select(
    State(state): State<AppState>,
    Json(request): Json<SetNameRequest>,
) -> Result<Json<SetListResponse>> {
    let mut store = state.store()?;
    store.modify(|library| library.select(&request.name).map_err(ApiError::from))?;
    Ok(Json(SetListResponse::from_library(store.library())))
}

/// DELETE /api/sets/:name
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SetListResponse>> {
    let mut rounds = state.rounds()?;
    let mut store = state.store()?;
    let removed = store.modify(|library| library.delete(&name).map_err(ApiError::from))?;
    let dropped = rounds.remove_for_set(&name);
    tracing::info!(
        "Deleted set {:?} with {} cards, dropped {} open rounds",
        name,
        removed.len(),
        dropped
    );
    Ok(Json(SetListResponse::from_library(store.library())))
}
