//! Round endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use flashlearn_core::{apply_round_results, build_round};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::rounds::ActiveRound;
use crate::AppState;

fn round_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("round {id}"))
}

/// POST /api/sets/:name/rounds
pub async fn start(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(settings): Json<RoundSettings>,
) -> Result<(StatusCode, Json<RoundView>)> {
    let mut rounds = state.rounds()?;
    let round = {
        let store = state.store()?;
        let set = store.library().require(&name)?;
        build_round(set, &settings, &mut rand::rng())?
    };

    let active = ActiveRound::new(name, settings, round);
    let view = {
        let id = rounds.insert(active);
        let active = rounds.get(&id).ok_or_else(|| round_not_found(id))?;
        tracing::info!(
            "Started round {} on set {:?} with {} questions",
            id,
            active.set_name,
            active.round.len()
        );
        RoundView::new(id, active)
    };

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/rounds/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<RoundView>> {
    let rounds = state.rounds()?;
    let active = rounds.get(&id).ok_or_else(|| round_not_found(id))?;
    Ok(Json(RoundView::new(id, active)))
}

/// POST /api/rounds/:id/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let mut rounds = state.rounds()?;
    let active = rounds.get_mut(&id).ok_or_else(|| round_not_found(id))?;

    let correct = active
        .round
        .submit(request.answer.as_deref(), &active.settings)?;
    let correct_answer = active
        .round
        .current()
        .map(|item| item.question.correct_answer.clone())
        .unwrap_or_default();

    Ok(Json(AnswerResponse {
        correct,
        correct_answer,
        correct_answers: active.round.correct_answers(),
    }))
}

/// POST /api/rounds/:id/next
pub async fn next(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<RoundView>> {
    let mut rounds = state.rounds()?;
    let active = rounds.get_mut(&id).ok_or_else(|| round_not_found(id))?;
    active.round.advance()?;
    Ok(Json(RoundView::new(id, active)))
}

/// POST /api/rounds/:id/finish
///
/// Applies the round's mastery gains to its set and ends the round. The round
/// stays open if the gains cannot be saved.
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FinishRoundResponse>> {
    let mut rounds = state.rounds()?;
    let active = rounds.get(&id).ok_or_else(|| round_not_found(id))?;
    if !active.round.is_complete() {
        return Err(ApiError::Conflict(format!(
            "round {id} still has unanswered questions"
        )));
    }

    let results = {
        let mut store = state.store()?;
        store.modify(|library| {
            library
                .require_mut(&active.set_name)
                .map(|set| apply_round_results(&active.round, set))
                .map_err(ApiError::from)
        })?
    };

    let active = rounds.remove(&id).ok_or_else(|| round_not_found(id))?;
    let summary = active.round.summary();
    tracing::info!(
        "Finished round {} on set {:?}: {}/{} correct",
        id,
        active.set_name,
        summary.correct,
        summary.total
    );

    Ok(Json(FinishRoundResponse {
        set_name: active.set_name,
        summary,
        results: results.into_iter().map(CardResultView::from).collect(),
    }))
}

/// DELETE /api/rounds/:id
///
/// Abandons a round without touching mastery.
pub async fn discard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut rounds = state.rounds()?;
    rounds.remove(&id).ok_or_else(|| round_not_found(id))?;
    tracing::info!("Discarded round {}", id);
    Ok(StatusCode::NO_CONTENT)
}
