//! HTTP error mapping for catalog handlers.

use crate::app::catalog::ServiceError;
use crate::domain::validation::{fields, FieldErrors};
use crate::transport::http::types::{ErrorResponse, ValidationErrorResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug)]
pub enum ApiError {
    /// 400 with per-field messages.
    Validation(FieldErrors),
    /// 400: the body was not JSON of the expected shape.
    InvalidBody(String),
    /// 404, empty body.
    NotFound,
    /// 409 with per-field messages.
    Conflict(FieldErrors),
    /// 500; the detail is logged, never returned.
    Internal(String),
}

fn errors_body(errors: FieldErrors) -> Json<ValidationErrorResponse> {
    Json(ValidationErrorResponse { errors })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, errors_body(errors)).into_response()
            }
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                errors_body(FieldErrors::single("body", msg)),
            )
                .into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Conflict(errors) => {
                (StatusCode::CONFLICT, errors_body(errors)).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errors) => ApiError::Validation(errors),
            ServiceError::NotFound { .. } => ApiError::NotFound,
            ServiceError::Referenced { entity, .. } => ApiError::Conflict(FieldErrors::single(
                fields::WALKS,
                format!("{} is still referenced by one or more walks.", entity),
            )),
            ServiceError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
