use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let page = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                views::render_error("Internal Server Error", "The record store is unavailable.")
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                views::render_error("Not Found", msg)
            }
        };
        (status, Html(page)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
