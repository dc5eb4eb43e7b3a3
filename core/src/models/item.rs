// core/src/models/item.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchased product line, captured at checkout time. `price` is the unit
/// price at purchase; later catalog changes never touch persisted orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
  #[serde(default)]
  pub product_id: String,
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  pub price: Decimal,
  pub quantity: u32,
}
