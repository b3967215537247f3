//! Card endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/sets/:name/cards
pub async fn list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CardListResponse>> {
    let store = state.store()?;
    let set = store.library().require(&name)?;
    Ok(Json(CardListResponse::from_set(&name, set)))
}

/// POST /api/sets/:name/cards
pub async fn add(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<CardRequest>,
) -> Result<(StatusCode, Json<CardListResponse>)> {
    let mut store = state.store()?;
    store.modify(|library| {
        library
            .require_mut(&name)
            .and_then(|set| set.push(request.term, request.definition))
            .map_err(ApiError::from)
    })?;
    let set = store.library().require(&name)?;
    Ok((
        StatusCode::CREATED,
        Json(CardListResponse::from_set(&name, set)),
    ))
}

/// PUT /api/sets/:name/cards/:position
pub async fn edit(
    State(state): State<AppState>,
    Path((name, position)): Path<(String, usize)>,
    Json(request): Json<CardRequest>,
) -> Result<Json<CardListResponse>> {
    let mut store = state.store()?;
    store.modify(|library| {
        library
            .require_mut(&name)
            .and_then(|set| set.edit(position, &request.term, &request.definition))
            .map_err(ApiError::from)
    })?;
    let set = store.library().require(&name)?;
    Ok(Json(CardListResponse::from_set(&name, set)))
}

/// DELETE /api/sets/:name/cards/:position
pub async fn remove(
    State(state): State<AppState>,
    Path((name, position)): Path<(String, usize)>,
) -> Result<Json<CardListResponse>> {
    let mut store = state.store()?;
    let removed = store.modify(|library| {
        library
            .require_mut(&name)
            .and_then(|set| set.remove(position))
            .map_err(ApiError::from)
    })?;
    tracing::info!("Removed card {:?} from set {:?}", removed.term, name);
    let set = store.library().require(&name)?;
    Ok(Json(CardListResponse::from_set(&name, set)))
}

/// PUT /api/sets/:name/cards/:position/star
pub async fn star(
    State(state): State<AppState>,
    Path((name, position)): Path<(String, usize)>,
    Json(request): Json<StarRequest>,
) -> Result<Json<CardListResponse>> {
    let mut store = state.store()?;
    store.modify(|library| {
        library
            .require_mut(&name)
            .and_then(|set| set.set_starred(position, request.starred))
            .map_err(ApiError::from)
    })?;
    let set = store.library().require(&name)?;
    Ok(Json(CardListResponse::from_set(&name, set)))
}
