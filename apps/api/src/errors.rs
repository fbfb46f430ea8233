use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::document::DocumentKind;

/// Errors the matching core surfaces to its caller.
///
/// Everything else (short text, text without keywords) degrades to a
/// well-formed `MatchResult` carrying flags instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Both the resume and the job description are empty; nothing to compare")]
    EmptyInput,

    #[error("The {kind} is not valid text: {reason}")]
    InvalidEncoding { kind: DocumentKind, reason: String },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Match(err @ MatchError::EmptyInput) => {
                (StatusCode::BAD_REQUEST, "EMPTY_INPUT", err.to_string())
            }
            AppError::Match(err @ MatchError::InvalidEncoding { .. }) => {
                tracing::warn!("Rejected non-text payload: {err}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_ENCODING",
                    err.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_maps_to_bad_request() {
        let response = AppError::from(MatchError::EmptyInput).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_encoding_maps_to_unprocessable() {
        let err = MatchError::InvalidEncoding {
            kind: DocumentKind::Resume,
            reason: "invalid utf-8 sequence".to_string(),
        };
        assert!(err.to_string().contains("resume"));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("sample".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
