// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;
use crate::web::extractors::AdminUser;
use storefront_core::OrderDraft;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct CustomerQuery {
  /// Absent or empty values reach the service and fail with the documented
  /// missing-email validation error.
  #[serde(default)]
  pub email: String,
}

#[derive(Deserialize, Debug)]
pub struct StatusChange {
  /// An absent field behaves like an unknown label: the membership check
  /// rejects it and replies with the allowed values.
  #[serde(default)]
  pub status: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::place_order",
    skip(app_state, draft),
    fields(email = %draft.email, item_count = draft.items.len())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  draft: web::Json<OrderDraft>,
) -> Result<HttpResponse, ApiError> {
  let order = app_state.service.place_order(draft.into_inner()).await?;

  info!(order_id = %order.id, "Order placed for {}", order.email);
  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully",
      "order": order
  })))
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
  let orders = app_state.service.list_orders().await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
    name = "handler::user_orders",
    skip(app_state, query),
    fields(email = %query.email)
)]
pub async fn user_orders_handler(
  app_state: web::Data<AppState>,
  query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, ApiError> {
  let orders = app_state.service.orders_for_customer(&query.email).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
    name = "handler::update_status",
    skip(app_state, path, body, admin),
    fields(order_id = %path, requested = %body.status, admin = %admin.email())
)]
pub async fn update_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Json<StatusChange>,
  admin: AdminUser,
) -> Result<HttpResponse, ApiError> {
  let order = app_state
    .service
    .update_status(path.into_inner(), &body.status)
    .await?;

  info!(order_id = %order.id, status = %order.status, "Order status updated");
  Ok(HttpResponse::Ok().json(json!({
      "message": "Order status updated",
      "order": order
  })))
}
