// core/src/models/draft.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::item::LineItem;
use crate::models::order::PaymentStatus;
use crate::models::ShippingAddress;

/// Checkout payload as submitted by a client. This is the explicit request
/// schema for order creation: everything the client may say, nothing it may
/// not. Identity (`id`, `created_at`) and fulfilment state are server-side
/// concerns and have no fields here.
///
/// `email`, `items` and `total` default when absent so that the missing-field
/// case reaches [`crate::service::OrderService::place_order`] and fails with
/// the documented validation error rather than a deserializer message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
  #[serde(default)]
  pub items: Vec<LineItem>,
  #[serde(default)]
  pub email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping_address: Option<ShippingAddress>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_method: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subtotal: Option<Decimal>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping: Option<Decimal>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax: Option<Decimal>,
  #[serde(default)]
  pub total: Decimal,
  /// The client decides `Paid` vs `Cash on Delivery` from the gateway outcome;
  /// unspecified means `Pending`.
  #[serde(default)]
  pub payment_status: PaymentStatus,
}
