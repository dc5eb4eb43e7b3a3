// server/src/web/handlers/return_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;
use crate::web::extractors::{AdminUser, AuthenticatedUser};

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct ReturnRequestBody {
  #[serde(default)]
  pub reason: String,
}

#[derive(Deserialize, Debug)]
pub struct ReturnVerdict {
  #[serde(default)]
  pub status: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::request_return",
    skip(app_state, path, body, user),
    fields(order_id = %path, user = %user.email)
)]
pub async fn request_return_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Json<ReturnRequestBody>,
  user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  // Customers may only act on their own orders; admins may act for anyone.
  if !user.is_admin() {
    let order = app_state.service.find_order(id).await?;
    if order.email != user.email {
      warn!(order_id = %id, user = %user.email, "Return submission for another customer's order.");
      return Err(ApiError::Forbidden(
        "You may only request returns for your own orders.".to_string(),
      ));
    }
  }

  let order = app_state.service.request_return(id, &body.reason).await?;

  info!(order_id = %order.id, "Return request submitted for {}", order.email);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Return request submitted",
      "order": order
  })))
}

#[instrument(
    name = "handler::adjudicate_return",
    skip(app_state, path, body, admin),
    fields(order_id = %path, verdict = %body.status, admin = %admin.email())
)]
pub async fn adjudicate_return_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Json<ReturnVerdict>,
  admin: AdminUser,
) -> Result<HttpResponse, ApiError> {
  let order = app_state
    .service
    .adjudicate_return(path.into_inner(), &body.status)
    .await?;

  // "Return request approved successfully", mirroring the stored verdict.
  let verdict = order
    .return_request
    .as_ref()
    .map(|r| r.status.as_str().to_lowercase())
    .unwrap_or_default();

  info!(order_id = %order.id, verdict = %verdict, "Return request adjudicated");
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": format!("Return request {verdict} successfully"),
      "order": order
  })))
}
