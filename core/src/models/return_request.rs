// core/src/models/return_request.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Adjudication state of a submitted return. `Pending` is the submission
/// default; `Approved`, `Rejected` and `Processing` are set administratively.
/// The sub-state graph (`Processing` may still move to a verdict) is
/// convention, not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
  #[default]
  Pending,
  Approved,
  Rejected,
  Processing,
}

impl ReturnStatus {
  pub const ALLOWED: &'static [&'static str] = &["Pending", "Approved", "Rejected", "Processing"];

  pub fn as_str(&self) -> &'static str {
    match self {
      ReturnStatus::Pending => "Pending",
      ReturnStatus::Approved => "Approved",
      ReturnStatus::Rejected => "Rejected",
      ReturnStatus::Processing => "Processing",
    }
  }
}

impl std::str::FromStr for ReturnStatus {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Pending" => Ok(ReturnStatus::Pending),
      "Approved" => Ok(ReturnStatus::Approved),
      "Rejected" => Ok(ReturnStatus::Rejected),
      "Processing" => Ok(ReturnStatus::Processing),
      other => Err(OrderError::InvalidStatus {
        value: other.to_string(),
        allowed: Self::ALLOWED,
      }),
    }
  }
}

impl std::fmt::Display for ReturnStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Embedded return sub-record. Created whole by a valid submission and only
/// mutated afterwards by adjudication, which stamps `processed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
  pub requested: bool,
  pub reason: String,
  pub status: ReturnStatus,
  pub requested_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub processed_at: Option<DateTime<Utc>>,
}

impl ReturnRequest {
  /// A freshly submitted request awaiting adjudication.
  pub fn submitted(reason: impl Into<String>, at: DateTime<Utc>) -> Self {
    Self {
      requested: true,
      reason: reason.into(),
      status: ReturnStatus::Pending,
      requested_at: at,
      processed_at: None,
    }
  }
}
