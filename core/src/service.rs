// core/src/service.rs

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{OrderError, Result};
use crate::models::{Order, OrderDraft, OrderStatus, ReturnRequest, ReturnStatus};
use crate::notify::ConfirmationSender;
use crate::store::OrderStore;

/// Days after creation during which a return may be requested.
pub const RETURN_WINDOW_DAYS: i64 = 30;

/// Request-handling layer over the order store.
///
/// Enforces creation validation, status-enum membership, return-window
/// eligibility and the coupled approve-write. Constructed explicitly with its
/// collaborators; holds no global state.
pub struct OrderService {
  store: Arc<dyn OrderStore>,
  notifier: Arc<dyn ConfirmationSender>,
}

impl OrderService {
  pub fn new(store: Arc<dyn OrderStore>, notifier: Arc<dyn ConfirmationSender>) -> Self {
    Self { store, notifier }
  }

  /// Validates and persists a checkout payload, then fires the confirmation
  /// notification without awaiting it.
  #[instrument(skip(self, draft), fields(email = %draft.email, item_count = draft.items.len()))]
  pub async fn place_order(&self, draft: OrderDraft) -> Result<Order> {
    if draft.email.trim().is_empty() || draft.items.is_empty() || draft.total <= Decimal::ZERO {
      return Err(OrderError::Validation("Missing required order fields".into()));
    }

    let order = Order {
      id: Uuid::new_v4(),
      items: draft.items,
      email: draft.email,
      shipping_address: draft.shipping_address,
      payment_method: draft.payment_method,
      subtotal: draft.subtotal,
      shipping: draft.shipping,
      tax: draft.tax,
      total: draft.total,
      status: OrderStatus::Pending,
      payment_status: draft.payment_status,
      created_at: Utc::now(),
      return_request: None,
    };
    self.store.insert(&order).await?;
    info!(order_id = %order.id, total = %order.total, "order placed");

    // Fire-and-forget: a failed confirmation must never fail the placement.
    let notifier = Arc::clone(&self.notifier);
    let placed = order.clone();
    tokio::spawn(async move {
      if let Err(error) = notifier.send_order_confirmation(&placed.email, &placed).await {
        warn!(order_id = %placed.id, error = %error, "order confirmation send failed");
      }
    });

    Ok(order)
  }

  /// All orders, newest first. Administrative read.
  #[instrument(skip(self))]
  pub async fn list_orders(&self) -> Result<Vec<Order>> {
    self.store.list_all().await
  }

  /// Orders belonging to one customer email, newest first.
  #[instrument(skip(self))]
  pub async fn orders_for_customer(&self, email: &str) -> Result<Vec<Order>> {
    if email.trim().is_empty() {
      return Err(OrderError::Validation(
        "Email query parameter is required".into(),
      ));
    }
    self.store.list_by_email(email).await
  }

  pub async fn find_order(&self, id: Uuid) -> Result<Order> {
    self.store.find(id).await?.ok_or(OrderError::NotFound(id))
  }

  /// Overwrites the order status with any member of the status enum. There is
  /// deliberately no transition graph: administrative correction may move an
  /// order backwards.
  #[instrument(skip(self), fields(%id, requested))]
  pub async fn update_status(&self, id: Uuid, requested: &str) -> Result<Order> {
    let status: OrderStatus = requested.parse()?;
    let updated = self
      .store
      .update_status(id, status)
      .await?
      .ok_or(OrderError::NotFound(id))?;
    info!(order_id = %updated.id, status = %status, "order status updated");
    Ok(updated)
  }

  /// Customer-initiated return submission.
  #[instrument(skip(self, reason), fields(%id))]
  pub async fn request_return(&self, id: Uuid, reason: &str) -> Result<Order> {
    if reason.trim().is_empty() {
      return Err(OrderError::Validation("Return reason is required".into()));
    }

    let order = self.find_order(id).await?;
    if order.return_requested() {
      return Err(OrderError::ReturnAlreadyRequested);
    }

    // Eligibility is measured against the creation date, never the current
    // return state or the adjudication date.
    let now = Utc::now();
    if now > order.created_at + Duration::days(RETURN_WINDOW_DAYS) {
      return Err(OrderError::ReturnWindowExpired);
    }

    let updated = self
      .store
      .set_return_request(id, ReturnRequest::submitted(reason, now))
      .await?
      .ok_or(OrderError::NotFound(id))?;
    info!(order_id = %updated.id, "return request submitted");
    Ok(updated)
  }

  /// Administrative adjudication of a submitted return. Approval couples the
  /// order's top-level status to the verdict; the store writes both fields in
  /// one transaction.
  #[instrument(skip(self), fields(%id, verdict))]
  pub async fn adjudicate_return(&self, id: Uuid, verdict: &str) -> Result<Order> {
    let verdict: ReturnStatus = verdict.parse()?;
    let coupled_status = (verdict == ReturnStatus::Approved).then_some(OrderStatus::Returned);
    let updated = self
      .store
      .finalize_return(id, verdict, Utc::now(), coupled_status)
      .await?;
    info!(order_id = %updated.id, verdict = %verdict, "return request adjudicated");
    Ok(updated)
  }
}
