// core/src/notify.rs

//! Order-confirmation notification seam.
//!
//! The sender is a best-effort collaborator: the service fires it after an
//! order is persisted and logs failures without ever surfacing them to the
//! customer. Deployments plug in a real mail provider behind
//! [`ConfirmationSender`]; [`MockEmailSender`] simulates one.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::models::Order;

#[async_trait]
pub trait ConfirmationSender: Send + Sync {
  /// Delivers (or enqueues) a confirmation for a freshly placed order.
  async fn send_order_confirmation(&self, email: &str, order: &Order) -> anyhow::Result<()>;
}

/// Simulated mail provider: logs the send, sleeps a network-ish latency and
/// fabricates a message id. Addresses under the reserved `.invalid` TLD are
/// rejected, which gives demos and tests a deliberate failure path.
pub struct MockEmailSender {
  from: String,
}

impl MockEmailSender {
  pub fn new(from: impl Into<String>) -> Self {
    Self { from: from.into() }
  }
}

#[async_trait]
impl ConfirmationSender for MockEmailSender {
  async fn send_order_confirmation(&self, email: &str, order: &Order) -> anyhow::Result<()> {
    info!(
      to = %email,
      from = %self.from,
      order_id = %order.id,
      total = %order.total,
      "sending order confirmation"
    );
    tokio::time::sleep(std::time::Duration::from_millis(20)).await; // Simulate network latency

    if email.ends_with(".invalid") {
      anyhow::bail!("delivery rejected for '{email}'");
    }

    let message_id = format!("mock_email_{}", Uuid::new_v4());
    info!(%message_id, order_id = %order.id, "order confirmation dispatched");
    Ok(())
  }
}
