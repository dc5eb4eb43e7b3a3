// core/src/error.rs

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Everything the order core can refuse to do, and why.
///
/// Variants are precise so callers (and tests) can match on the exact refusal;
/// the wire contract only distinguishes the four [`ErrorCategory`] values.
#[derive(Debug, Error)]
pub enum OrderError {
  /// Malformed or missing input: absent creation fields, empty return reason,
  /// missing email query.
  #[error("{0}")]
  Validation(String),

  /// A status value outside the fixed enum, with the accepted wire labels.
  #[error("Invalid status value '{value}' (allowed: {})", .allowed.join(", "))]
  InvalidStatus {
    value: String,
    allowed: &'static [&'static str],
  },

  #[error("Order not found")]
  NotFound(Uuid),

  #[error("Return already requested for this order")]
  ReturnAlreadyRequested,

  #[error("Return window has expired")]
  ReturnWindowExpired,

  /// Adjudication of an order whose return was never requested.
  #[error("No return request for this order")]
  NoReturnRequested,

  #[error("Storage failure: {0}")]
  Storage(#[from] sqlx::Error),
}

/// Machine-readable error category surfaced to API callers alongside the
/// human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
  Validation,
  NotFound,
  InvalidState,
  Storage,
}

impl OrderError {
  pub fn category(&self) -> ErrorCategory {
    match self {
      OrderError::Validation(_) | OrderError::InvalidStatus { .. } => ErrorCategory::Validation,
      OrderError::NotFound(_) => ErrorCategory::NotFound,
      OrderError::ReturnAlreadyRequested
      | OrderError::ReturnWindowExpired
      | OrderError::NoReturnRequested => ErrorCategory::InvalidState,
      OrderError::Storage(_) => ErrorCategory::Storage,
    }
  }
}

pub type Result<T, E = OrderError> = std::result::Result<T, E>;
