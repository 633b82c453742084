use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockfolio_core::errors::Error as CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Error calculating portfolio: {0}")]
    Valuation(String),
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Error body: a human message plus the underlying error detail.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, "Invalid request", e.to_string())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                    e.to_string(),
                ),
            },
            ApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "Invalid request", reason.clone())
            }
            ApiError::Valuation(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error calculating portfolio",
                detail.clone(),
            ),
            ApiError::Internal(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
                reason.clone(),
            ),
            ApiError::Anyhow(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
                e.to_string(),
            ),
        };
        let body = Json(ErrorBody {
            message: message.to_string(),
            error,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
