// core/src/store/memory.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{OrderError, Result};
use crate::models::{Order, OrderStatus, ReturnRequest, ReturnStatus};
use crate::store::OrderStore;

/// Order store backed by a process-local vector. Used by the test suites and
/// the runnable examples; also handy for a database-less local run.
///
/// A single `RwLock` makes every write a critical section, which trivially
/// satisfies the adjudication atomicity contract: the check and the coupled
/// write happen under one write guard.
#[derive(Default)]
pub struct MemoryOrderStore {
  orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored orders. Test convenience.
  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }

  fn sorted_newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
  }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  async fn insert(&self, order: &Order) -> Result<()> {
    self.orders.write().push(order.clone());
    Ok(())
  }

  async fn find(&self, id: Uuid) -> Result<Option<Order>> {
    Ok(self.orders.read().iter().find(|o| o.id == id).cloned())
  }

  async fn list_all(&self) -> Result<Vec<Order>> {
    Ok(Self::sorted_newest_first(self.orders.read().clone()))
  }

  async fn list_by_email(&self, email: &str) -> Result<Vec<Order>> {
    let matching = self
      .orders
      .read()
      .iter()
      .filter(|o| o.email == email)
      .cloned()
      .collect();
    Ok(Self::sorted_newest_first(matching))
  }

  async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Option<Order>> {
    let mut orders = self.orders.write();
    Ok(orders.iter_mut().find(|o| o.id == id).map(|order| {
      order.status = status;
      order.clone()
    }))
  }

  async fn set_return_request(&self, id: Uuid, request: ReturnRequest) -> Result<Option<Order>> {
    let mut orders = self.orders.write();
    Ok(orders.iter_mut().find(|o| o.id == id).map(|order| {
      order.return_request = Some(request.clone());
      order.clone()
    }))
  }

  async fn finalize_return(
    &self,
    id: Uuid,
    verdict: ReturnStatus,
    processed_at: DateTime<Utc>,
    order_status: Option<OrderStatus>,
  ) -> Result<Order> {
    // One write guard spans the check and both field writes.
    let mut orders = self.orders.write();
    let order = orders
      .iter_mut()
      .find(|o| o.id == id)
      .ok_or(OrderError::NotFound(id))?;

    let request = order
      .return_request
      .as_mut()
      .filter(|r| r.requested)
      .ok_or(OrderError::NoReturnRequested)?;

    request.status = verdict;
    request.processed_at = Some(processed_at);
    if let Some(status) = order_status {
      order.status = status;
    }
    Ok(order.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn order_created_at(email: &str, created_at: DateTime<Utc>) -> Order {
    Order {
      id: Uuid::new_v4(),
      items: vec![],
      email: email.to_string(),
      shipping_address: None,
      payment_method: None,
      subtotal: None,
      shipping: None,
      tax: None,
      total: dec!(10),
      status: OrderStatus::Pending,
      payment_status: Default::default(),
      created_at,
      return_request: None,
    }
  }

  #[tokio::test]
  async fn lists_are_newest_first() {
    let store = MemoryOrderStore::new();
    let old = order_created_at("a@b.com", Utc::now() - chrono::Duration::days(2));
    let new = order_created_at("a@b.com", Utc::now());
    store.insert(&old).await.unwrap();
    store.insert(&new).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all[0].id, new.id);
    assert_eq!(all[1].id, old.id);

    let by_email = store.list_by_email("a@b.com").await.unwrap();
    assert_eq!(by_email[0].id, new.id);
  }

  #[tokio::test]
  async fn email_filter_is_exact_and_empty_result_is_ok() {
    let store = MemoryOrderStore::new();
    store
      .insert(&order_created_at("a@b.com", Utc::now()))
      .await
      .unwrap();

    assert!(store.list_by_email("other@b.com").await.unwrap().is_empty());
    assert_eq!(store.list_by_email("a@b.com").await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn finalize_refuses_orders_without_a_request() {
    let store = MemoryOrderStore::new();
    let order = order_created_at("a@b.com", Utc::now());
    store.insert(&order).await.unwrap();

    let err = store
      .finalize_return(order.id, ReturnStatus::Approved, Utc::now(), None)
      .await
      .unwrap_err();
    assert!(matches!(err, OrderError::NoReturnRequested));
  }
}
