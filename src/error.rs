use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    MSG_BAD_REQUEST, MSG_METHOD_NOT_ALLOWED, MSG_NOT_FOUND, MSG_SERVER_ERROR, MSG_UNPROCESSABLE,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable entity")]
    Unprocessable,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Implement IntoResponse to convert AppError into the JSON error envelope
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_SERVER_ERROR
            }
            AppError::BadRequest(ref reason) => {
                tracing::debug!("Bad request: {}", reason);
                MSG_BAD_REQUEST
            }
            AppError::NotFound => MSG_NOT_FOUND,
            AppError::MethodNotAllowed => MSG_METHOD_NOT_ALLOWED,
            AppError::Unprocessable => MSG_UNPROCESSABLE,
        };

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "message": message,
            "error": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
