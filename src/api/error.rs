//! API error type and its JSON rendering.
//!
//! Every fault on the composition endpoints is reported the same way:
//! `{"success": false, "error": "<message>"}` with `500 Internal Server
//! Error`. The variants exist for logging; they do not change the status.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::dto::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON object.
    #[error("{0}")]
    Body(String),

    /// The query string could not be decoded.
    #[error("{0}")]
    Query(String),

    /// Anything raised while producing the response.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Body(_) => "body",
            Self::Query(_) => "query",
            Self::Internal(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(kind = self.kind(), error = %self, "Request failed");

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
