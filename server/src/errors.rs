// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use storefront_core::{ErrorCategory, OrderError, ReturnStatus};

#[derive(Debug, Error)]
pub enum ApiError {
  /// Any refusal from the order core; mapped per its category.
  #[error(transparent)]
  Order(#[from] OrderError),

  #[error("Authentication Required: {0}")]
  Auth(String),

  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl ResponseError for ApiError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(api_error = %self, "Responding with error");
    match self {
      ApiError::Order(err) => order_error_response(err),
      ApiError::Auth(m) => {
        HttpResponse::Unauthorized().json(json!({"error": m, "code": "unauthorized"}))
      }
      ApiError::Forbidden(m) => {
        HttpResponse::Forbidden().json(json!({"error": m, "code": "forbidden"}))
      }
      ApiError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
    }
  }
}

/// The wire mapping for the order core's taxonomy: 400 for validation and
/// invalid-state refusals, 404 for absent orders, 500 with a redacted message
/// for storage trouble. Enum-membership failures carry the accepted labels.
fn order_error_response(err: &OrderError) -> HttpResponse {
  let code = err.category();
  match err {
    OrderError::InvalidStatus { allowed, .. } => {
      // The dashboard distinguishes the two enum-membership refusals by text.
      let message = if *allowed == ReturnStatus::ALLOWED {
        "Invalid return status"
      } else {
        "Invalid status value"
      };
      HttpResponse::BadRequest().json(json!({
        "error": message,
        "code": code,
        "allowed": allowed,
      }))
    }
    OrderError::Storage(_) => HttpResponse::InternalServerError().json(json!({
      "error": "Database operation failed",
      "code": code,
    })),
    _ => {
      let body = json!({"error": err.to_string(), "code": code});
      match code {
        ErrorCategory::NotFound => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
