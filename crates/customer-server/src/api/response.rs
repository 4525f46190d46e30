//! API response types
//!
//! Every handler answers through [`send_json`], so a response always
//! carries a JSON body, `{}` when there is nothing to say.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::features::shared::validation::FieldError;

/// Write `body` as JSON with the given status, or `{}` when absent
pub fn send_json<T: Serialize>(status: StatusCode, body: Option<T>) -> Response {
    match body {
        Some(body) => (status, Json(body)).into_response(),
        None => (status, Json(serde_json::json!({}))).into_response(),
    }
}

/// Error body shapes returned to clients
///
/// - `{"errors": [{"field": ..., "message": ...}]}` for failed field rules
/// - `{"errors": "<message>"}` for not-found and empty updates
/// - `{"error": "<message>"}` for store and request-format failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Fields { errors: Vec<FieldError> },
    Message { errors: String },
    Failure { error: String },
}

impl ErrorBody {
    pub fn fields(errors: Vec<FieldError>) -> Self {
        Self::Fields { errors }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            errors: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            error: message.into(),
        }
    }
}
