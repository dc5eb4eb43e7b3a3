// core/examples/place_and_return.rs

use std::sync::Arc;

use rust_decimal_macros::dec;
use storefront_core::{
  LineItem, MemoryOrderStore, MockEmailSender, OrderDraft, OrderService, PaymentStatus,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Place-and-Return Walkthrough ---");

  // 1. Assemble the service over the in-memory store with the mock mailer.
  let store = Arc::new(MemoryOrderStore::new());
  let mailer = Arc::new(MockEmailSender::new("orders@storefront.example"));
  let service = OrderService::new(store.clone(), mailer);

  // 2. Place an order the way a checkout client would.
  let draft = OrderDraft {
    items: vec![LineItem {
      product_id: "sku-enamel-mug".into(),
      name: "Enamel Mug".into(),
      image: None,
      price: dec!(12.50),
      quantity: 2,
    }],
    email: "ada@example.com".into(),
    shipping_address: None,
    payment_method: Some("card".into()),
    subtotal: Some(dec!(25.00)),
    shipping: Some(dec!(4.99)),
    tax: Some(dec!(2.05)),
    total: dec!(32.04),
    payment_status: PaymentStatus::Paid,
  };
  let order = service.place_order(draft).await?;
  info!(order_id = %order.id, status = %order.status, "order placed");

  // 3. Walk the fulfilment statuses an admin dashboard would set.
  for status in ["Shipped", "Reached Nearby", "Delivered"] {
    let updated = service.update_status(order.id, status).await?;
    info!(order_id = %updated.id, status = %updated.status, "status updated");
  }

  // 4. The customer submits a return, well inside the 30-day window.
  let updated = service
    .request_return(order.id, "Handle cracked in transit")
    .await?;
  let request_status = updated
    .return_request
    .as_ref()
    .map(|r| r.status.as_str())
    .unwrap_or("-");
  info!(order_id = %updated.id, request = request_status, "return submitted");

  // 5. An admin approves it; the coupled write also flips the order status.
  let settled = service.adjudicate_return(order.id, "Approved").await?;
  info!(
    order_id = %settled.id,
    order_status = %settled.status,
    request = settled.return_request.as_ref().map(|r| r.status.as_str()).unwrap_or("-"),
    "return adjudicated"
  );

  assert_eq!(settled.status.as_str(), "Returned");
  assert_eq!(store.len(), 1);

  // Give the fire-and-forget confirmation a moment before the runtime exits.
  tokio::time::sleep(std::time::Duration::from_millis(50)).await;

  Ok(())
}
