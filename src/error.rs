use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid seat count: {0}")]
    InvalidSeatCount(String),

    #[error("Not enough seats available")]
    InsufficientSeats { requested: u32, available: usize },

    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSeatCount(_) | AppError::InsufficientSeats { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Storage(e) => {
                tracing::error!("storage failure: {:?}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.status_code(), Json(json!({ "message": message }))).into_response()
    }
}
