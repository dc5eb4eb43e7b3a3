// core/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

use crate::error::OrderError;
use crate::models::item::LineItem;
use crate::models::return_request::ReturnRequest;
use crate::models::ShippingAddress;

/// Top-level fulfilment state of an order.
///
/// The wire labels are the ones the storefront and dashboard clients already
/// speak, including the spaced `"Reached Nearby"` form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
  #[default]
  Pending,
  Shipped,
  #[serde(rename = "Reached Nearby")]
  ReachedNearby,
  Delivered,
  Returned,
}

impl OrderStatus {
  /// Every accepted wire label, in declaration order. Quoted back to callers
  /// when a status-change request carries an unknown value.
  pub const ALLOWED: &'static [&'static str] =
    &["Pending", "Shipped", "Reached Nearby", "Delivered", "Returned"];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "Pending",
      OrderStatus::Shipped => "Shipped",
      OrderStatus::ReachedNearby => "Reached Nearby",
      OrderStatus::Delivered => "Delivered",
      OrderStatus::Returned => "Returned",
    }
  }
}

impl std::str::FromStr for OrderStatus {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Pending" => Ok(OrderStatus::Pending),
      "Shipped" => Ok(OrderStatus::Shipped),
      "Reached Nearby" => Ok(OrderStatus::ReachedNearby),
      "Delivered" => Ok(OrderStatus::Delivered),
      "Returned" => Ok(OrderStatus::Returned),
      other => Err(OrderError::InvalidStatus {
        value: other.to_string(),
        allowed: Self::ALLOWED,
      }),
    }
  }
}

impl std::fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Settlement state reported by the client at checkout time. The order core
/// never talks to the payment gateway itself; it records the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
pub enum PaymentStatus {
  #[default]
  Pending,
  Paid,
  #[serde(rename = "Cash on Delivery")]
  CashOnDelivery,
  Failed,
}

impl PaymentStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentStatus::Pending => "Pending",
      PaymentStatus::Paid => "Paid",
      PaymentStatus::CashOnDelivery => "Cash on Delivery",
      PaymentStatus::Failed => "Failed",
    }
  }
}

impl std::fmt::Display for PaymentStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One purchase. The item list, address and totals are immutable once the
/// order is persisted; only `status`, `payment_status` and `return_request`
/// change afterwards, and there is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  #[sqlx(json)]
  pub items: Vec<LineItem>,
  pub email: String,
  #[sqlx(json(nullable))]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_address: Option<ShippingAddress>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub payment_method: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subtotal: Option<Decimal>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping: Option<Decimal>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tax: Option<Decimal>,
  pub total: Decimal,
  pub status: OrderStatus,
  pub payment_status: PaymentStatus,
  pub created_at: DateTime<Utc>,
  /// Absent until the customer submits a return for this order.
  #[sqlx(json(nullable))]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub return_request: Option<ReturnRequest>,
}

impl Order {
  /// Whether a return has already been submitted for this order.
  pub fn return_requested(&self) -> bool {
    self.return_request.as_ref().is_some_and(|r| r.requested)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn order_status_round_trips_through_wire_labels() {
    for label in OrderStatus::ALLOWED {
      let parsed: OrderStatus = label.parse().expect("label should parse");
      assert_eq!(parsed.as_str(), *label);
    }
  }

  #[test]
  fn order_status_rejects_unknown_label_listing_allowed() {
    let err = "Lost In Transit".parse::<OrderStatus>().unwrap_err();
    match err {
      OrderError::InvalidStatus { value, allowed } => {
        assert_eq!(value, "Lost In Transit");
        assert_eq!(allowed, OrderStatus::ALLOWED);
      }
      other => panic!("expected InvalidStatus, got {other:?}"),
    }
  }

  #[test]
  fn spaced_labels_serialize_as_the_clients_expect() {
    assert_eq!(
      serde_json::to_string(&OrderStatus::ReachedNearby).unwrap(),
      "\"Reached Nearby\""
    );
    assert_eq!(
      serde_json::to_string(&PaymentStatus::CashOnDelivery).unwrap(),
      "\"Cash on Delivery\""
    );
  }
}
