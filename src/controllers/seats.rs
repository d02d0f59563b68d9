use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::{views, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/api/seats", get(list_seats))
}

// GET /
async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let seats = state.store.list_all().await?;
    Ok(views::index(&seats, None))
}

#[derive(Debug, Deserialize)]
struct SeatsQuery {
    available: Option<bool>,
}

// GET /api/seats
async fn list_seats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeatsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let seats = if params.available.unwrap_or(false) {
        state.store.list_available().await?
    } else {
        state.store.list_all().await?
    };
    Ok(Json(seats))
}
