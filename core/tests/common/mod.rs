// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rust_decimal_macros::dec;
use storefront_core::notify::ConfirmationSender;
use storefront_core::store::{MemoryOrderStore, OrderStore};
use storefront_core::{
  LineItem, Order, OrderDraft, OrderError, OrderService, OrderStatus, PaymentStatus, Result,
  ReturnRequest, ReturnStatus, ShippingAddress,
};
use tracing::Level;
use uuid::Uuid;

// --- Builders ---

pub fn line_item(name: &str, price: rust_decimal::Decimal, quantity: u32) -> LineItem {
  LineItem {
    product_id: format!("sku-{name}"),
    name: name.to_string(),
    image: None,
    price,
    quantity,
  }
}

pub fn shipping_address() -> ShippingAddress {
  ShippingAddress {
    first_name: "Ada".to_string(),
    last_name: "Lovelace".to_string(),
    address: "12 Analytical Row".to_string(),
    apartment: None,
    city: "London".to_string(),
    state: "LDN".to_string(),
    zip: "N1 9GU".to_string(),
    phone: "020 7946 0000".to_string(),
  }
}

/// A complete, valid checkout payload for the given customer.
pub fn draft_for(email: &str) -> OrderDraft {
  OrderDraft {
    items: vec![line_item("enamel-mug", dec!(12.50), 2)],
    email: email.to_string(),
    shipping_address: Some(shipping_address()),
    payment_method: Some("card".to_string()),
    subtotal: Some(dec!(25.00)),
    shipping: Some(dec!(4.99)),
    tax: Some(dec!(2.05)),
    total: dec!(32.04),
    payment_status: PaymentStatus::Paid,
  }
}

/// An already-persisted-shape order whose creation date lies `days_ago` in the
/// past. Inserted directly into a store to exercise the return window, which
/// cannot be reached through `place_order` (that always stamps "now").
pub fn order_created_days_ago(email: &str, days_ago: i64) -> Order {
  Order {
    id: Uuid::new_v4(),
    items: vec![line_item("enamel-mug", dec!(12.50), 1)],
    email: email.to_string(),
    shipping_address: None,
    payment_method: Some("card".to_string()),
    subtotal: Some(dec!(12.50)),
    shipping: Some(dec!(4.99)),
    tax: Some(dec!(1.02)),
    total: dec!(18.51),
    status: OrderStatus::Delivered,
    payment_status: PaymentStatus::Paid,
    created_at: Utc::now() - Duration::days(days_ago),
    return_request: None,
  }
}

// --- Test Doubles ---

/// Confirmation sender that records every delivery instead of sending one.
/// Construct with `failing()` to simulate a provider outage.
pub struct RecordingSender {
  sent: Mutex<Vec<(String, Uuid)>>,
  fail: bool,
}

impl RecordingSender {
  pub fn new() -> Arc<Self> {
    Arc::new(Self {
      sent: Mutex::new(Vec::new()),
      fail: false,
    })
  }

  pub fn failing() -> Arc<Self> {
    Arc::new(Self {
      sent: Mutex::new(Vec::new()),
      fail: true,
    })
  }

  pub fn sent(&self) -> Vec<(String, Uuid)> {
    self.sent.lock().clone()
  }

  pub fn sent_count(&self) -> usize {
    self.sent.lock().len()
  }
}

#[async_trait]
impl ConfirmationSender for RecordingSender {
  async fn send_order_confirmation(&self, email: &str, order: &Order) -> anyhow::Result<()> {
    if self.fail {
      anyhow::bail!("simulated provider outage");
    }
    self.sent.lock().push((email.to_string(), order.id));
    Ok(())
  }
}

/// Store whose every operation reports a pool failure, for asserting that
/// storage trouble surfaces as `OrderError::Storage`.
pub struct FailingStore;

fn pool_down() -> OrderError {
  OrderError::Storage(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl OrderStore for FailingStore {
  async fn insert(&self, _order: &Order) -> Result<()> {
    Err(pool_down())
  }

  async fn find(&self, _id: Uuid) -> Result<Option<Order>> {
    Err(pool_down())
  }

  async fn list_all(&self) -> Result<Vec<Order>> {
    Err(pool_down())
  }

  async fn list_by_email(&self, _email: &str) -> Result<Vec<Order>> {
    Err(pool_down())
  }

  async fn update_status(&self, _id: Uuid, _status: OrderStatus) -> Result<Option<Order>> {
    Err(pool_down())
  }

  async fn set_return_request(&self, _id: Uuid, _request: ReturnRequest) -> Result<Option<Order>> {
    Err(pool_down())
  }

  async fn finalize_return(
    &self,
    _id: Uuid,
    _verdict: ReturnStatus,
    _processed_at: DateTime<Utc>,
    _order_status: Option<OrderStatus>,
  ) -> Result<Order> {
    Err(pool_down())
  }
}

// --- Service Assembly ---

/// Service over a fresh in-memory store with a recording sender. Returns all
/// three so tests can inspect the store and the sender directly.
pub fn fresh_service() -> (OrderService, Arc<MemoryOrderStore>, Arc<RecordingSender>) {
  let store = Arc::new(MemoryOrderStore::new());
  let sender = RecordingSender::new();
  let service = OrderService::new(store.clone(), sender.clone());
  (service, store, sender)
}

pub fn service_over(store: Arc<MemoryOrderStore>) -> (OrderService, Arc<RecordingSender>) {
  let sender = RecordingSender::new();
  let service = OrderService::new(store, sender.clone());
  (service, sender)
}

/// Lets the spawned confirmation task run before asserting on the sender.
pub async fn drain_notifications() {
  tokio::time::sleep(std::time::Duration::from_millis(50)).await;
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
