use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::{views, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/book", post(book))
}

#[derive(Debug, Deserialize)]
struct BookForm {
    num_seats: String,
}

#[derive(Debug, Validate)]
struct BookRequest {
    #[validate(range(min = 1))]
    num_seats: i64,
}

impl TryFrom<BookForm> for BookRequest {
    type Error = AppError;

    fn try_from(form: BookForm) -> Result<Self, Self::Error> {
        let num_seats = form
            .num_seats
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidSeatCount("num_seats must be a number".to_string()))?;

        let request = BookRequest { num_seats };
        request
            .validate()
            .map_err(|_| AppError::InvalidSeatCount("num_seats must be a positive number".to_string()))?;
        Ok(request)
    }
}

// POST /book
async fn book(
    State(state): State<Arc<AppState>>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("rejected booking form: {}", e);
        AppError::InvalidSeatCount("num_seats is required".to_string())
    })?;
    let request = BookRequest::try_from(form)?;

    let count = u32::try_from(request.num_seats)
        .map_err(|_| AppError::InvalidSeatCount("num_seats is too large".to_string()))?;

    let booked = state.allocator.book(count).await?;
    let labels: Vec<String> = booked.iter().map(|s| s.label()).collect();

    let seats = state.store.list_all().await?;
    Ok(views::index(&seats, Some(labels.as_slice())))
}
