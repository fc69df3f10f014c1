use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use cartelera_core::CoreError;

use crate::dto::ErrorBody;

/// Route-layer error: everything a handler can reject a request with.
///
/// Not-found is an error here even though the repository reports it as a
/// plain `None`; the translation happens at the route boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Event not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::DuplicateId(_) => Self::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        };

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Turn a handler panic into the generic 500 envelope.
///
/// The panic payload is logged but never exposed to the caller.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = detail, "request handler panicked");

    let body = ErrorBody {
        success: false,
        error: "Internal server error".to_string(),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
