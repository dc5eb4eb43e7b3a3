// core/src/models/address.rs

use serde::{Deserialize, Serialize};

/// Structured delivery address attached to an order at checkout. Clients may
/// omit individual fields; the order core stores what it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  #[serde(default)]
  pub address: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub apartment: Option<String>,
  #[serde(default)]
  pub city: String,
  #[serde(default)]
  pub state: String,
  #[serde(default)]
  pub zip: String,
  #[serde(default)]
  pub phone: String,
}
