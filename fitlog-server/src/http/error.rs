//! API error types with IntoResponse
//!
//! Every failure a handler can hit is converted to a JSON body at the
//! boundary; store errors are logged here and never leak details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// A request field failed coercion (400)
    Validation(ValidationError),

    /// The identifier does not resolve to a user (404)
    UserNotFound,

    /// A store operation failed (500); the body carries only the
    /// operation's generic message, the real error goes to the log
    Failure {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a store error: a missing row is the not-found response,
    /// anything else is the operation's failure message.
    pub fn from_db(message: &'static str, err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => Self::UserNotFound,
            other => Self::Failure {
                message,
                source: other,
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(err) => {
                (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() }))
            }
            Self::UserNotFound => (StatusCode::NOT_FOUND, json!({ "error": "User not found" })),
            Self::Failure { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
