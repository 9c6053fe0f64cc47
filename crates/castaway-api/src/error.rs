//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The data source could not produce a collection the view needs.
  #[error("{view}: data source unavailable: {source}")]
  Unavailable {
    view:   &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn unavailable(
    view: &'static str,
    source: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::Unavailable { view, source: Box::new(source) }
  }
}

impl From<castaway_core::Error> for ApiError {
  fn from(e: castaway_core::Error) -> Self { Self::BadRequest(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Unavailable { view, source } => {
        tracing::error!(view, error = %source, "data source unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "no data available".to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
