//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Response bodies are `{"message": "..."}`. Internal details are logged,
/// never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed: {0}")]
  Validation(String),

  /// The request body could not be decoded.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] jot_core::Error),
}

impl From<jot_core::Error> for ApiError {
  fn from(err: jot_core::Error) -> Self {
    match err {
      jot_core::Error::Validation(m) => ApiError::Validation(m),
      jot_core::Error::NotFound(id) => ApiError::NotFound(id),
      other => ApiError::Store(other),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) | ApiError::BadRequest(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let message = match &self {
      ApiError::BadRequest(m) => {
        tracing::warn!(reason = %m, "undecodable request body");
        m.as_str()
      }
      ApiError::Validation(m) => {
        tracing::warn!(reason = %m, "rejected note input");
        "Title and content are required"
      }
      ApiError::NotFound(id) => {
        tracing::warn!(id = %id, "note not found");
        "Note not found"
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "note store failure");
        "Server error"
      }
    };
    (self.status(), Json(json!({ "message": message }))).into_response()
  }
}
