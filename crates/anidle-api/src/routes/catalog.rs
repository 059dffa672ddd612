//! Routes for the catalog.

use axum::extract::State;
use axum::{Json, Router, routing::get};

use crate::state::AppState;

/// GET /titles
async fn list_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.titles().map(str::to_owned).collect())
}

/// Returns the router for the catalog.
pub fn router() -> Router<AppState> {
    Router::new().route("/titles", get(list_titles))
}
