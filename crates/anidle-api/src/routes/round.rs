//! Routes for the active round.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use anidle_core::error::DomainError;
use anidle_round::application::command_handlers;
use anidle_round::application::query_handlers::{self, RoundView};
use anidle_round::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /guess.
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    /// Exact catalog title being guessed.
    pub title: String,
}

/// Response body for POST /guess.
#[derive(Debug, Serialize)]
pub struct GuessResponse {
    /// Whether the guess named the answer.
    pub won: bool,
    /// The round after the guess.
    pub round: RoundView,
}

/// POST /start
#[instrument(skip(state))]
async fn start_round(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let command = commands::StartRound {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling start_round command");

    let mut slot = state.lock_round()?;
    let round = {
        let mut rng = state.lock_rng()?;
        command_handlers::handle_start_round(
            &command,
            &state.catalog,
            &state.rules,
            state.clock.as_ref(),
            &mut *rng,
        )
    };
    let view = query_handlers::get_round_view(&round);
    *slot = Some(round);

    Ok(Json(view))
}

/// POST /guess
#[instrument(skip(state, request), fields(title = %request.title))]
async fn submit_guess(
    State(state): State<AppState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
    let command = commands::SubmitGuess {
        correlation_id: Uuid::new_v4(),
        title: request.title,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_guess command");

    let mut slot = state.lock_round()?;
    let round = slot.as_mut().ok_or(DomainError::NoActiveRound)?;
    let result = {
        let mut rng = state.lock_rng()?;
        command_handlers::handle_submit_guess(
            &command,
            round,
            &state.catalog,
            state.clock.as_ref(),
            &mut *rng,
        )?
    };

    Ok(Json(GuessResponse {
        won: result.won,
        round: query_handlers::get_round_view(round),
    }))
}

/// POST /give-up
#[instrument(skip(state))]
async fn give_up(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let command = commands::GiveUp {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling give_up command");

    let mut slot = state.lock_round()?;
    let round = slot.as_mut().ok_or(DomainError::NoActiveRound)?;
    {
        let mut rng = state.lock_rng()?;
        command_handlers::handle_give_up(&command, round, state.clock.as_ref(), &mut *rng)?;
    }

    Ok(Json(query_handlers::get_round_view(round)))
}

/// GET /
#[instrument(skip(state))]
async fn get_round(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let slot = state.lock_round()?;
    let round = slot.as_ref().ok_or(DomainError::NoActiveRound)?;
    Ok(Json(query_handlers::get_round_view(round)))
}

/// GET /available-titles
#[instrument(skip(state))]
async fn available_titles(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let slot = state.lock_round()?;
    Ok(Json(query_handlers::get_available_titles(
        &state.catalog,
        slot.as_ref(),
    )))
}

/// Returns the router for the round context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_round))
        .route("/start", post(start_round))
        .route("/guess", post(submit_guess))
        .route("/give-up", post(give_up))
        .route("/available-titles", get(available_titles))
}
