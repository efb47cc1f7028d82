//! API Error Taxonomy
//!
//! Every failure the HTTP layer can surface falls into exactly one of three
//! kinds, so a client can distinguish "malformed request" from "valid shape,
//! unresolvable reference" from "server bug":
//!
//! - **InvalidInput** (400): the request shape or content is unusable, e.g. a
//!   TF-IDF submission with zero documents.
//! - **NotFound** (404): the request referenced a packet or question that does
//!   not exist in the catalog.
//! - **Internal** (500): an unexpected failure. The engines accept any string
//!   input, so this should not occur in practice; it is logged as an error.
//!
//! Engines never partially fail: a call either returns a complete result or
//! signals exactly one of these kinds.

use async_trait::async_trait;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error kind tag included in every error response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    InvalidInput,
    NotFound,
    Internal,
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub error: String,
    /// Machine-readable error kind.
    pub error_type: ErrorType,
}

/// The single error type returned by all HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> ErrorType {
        match self {
            ApiError::InvalidInput(_) => ErrorType::InvalidInput,
            ApiError::NotFound(_) => ErrorType::NotFound,
            ApiError::Internal(_) => ErrorType::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal(_)) {
            tracing::error!("internal error: {}", self);
        } else {
            tracing::debug!("client error: {}", self);
        }
        let body = ErrorResponse {
            error: self.to_string(),
            error_type: self.error_type(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection is an `ApiError`.
///
/// The plain `axum::Json` extractor answers a malformed or incomplete body
/// with its own 422 plain-text rejection, outside the error taxonomy. This
/// wrapper converts the rejection into `InvalidInput` so that a body missing
/// a field gets the same 400 + `{error, error_type}` shape as every other
/// client error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_type_serialization() {
        let body = ErrorResponse {
            error: "unknown packet 'nonexistent'".to_string(),
            error_type: ErrorType::NotFound,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error_type"], "not_found");
        assert_eq!(json["error"], "unknown packet 'nonexistent'");
    }

    #[test]
    fn test_display_includes_kind_prefix() {
        let err = ApiError::InvalidInput("at least one document is required".into());
        assert_eq!(
            err.to_string(),
            "invalid input: at least one document is required"
        );
    }
}
