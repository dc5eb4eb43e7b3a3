// server/src/web/routes.rs

use actix_web::web;

// Placeholder for a simple health check handler function.
// In a real app, this might check DB connectivity or other critical services.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Order Lifecycle Routes
      .service(
        web::scope("/orders")
          .route(
            "",
            web::post().to(crate::web::handlers::order_handlers::place_order_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          )
          .route(
            "/user",
            web::get().to(crate::web::handlers::order_handlers::user_orders_handler),
          )
          .route(
            "/{order_id}/status",
            web::put().to(crate::web::handlers::order_handlers::update_status_handler),
          )
          .route(
            "/{order_id}/return",
            web::put().to(crate::web::handlers::return_handlers::request_return_handler),
          )
          .route(
            "/{order_id}/return/status",
            web::put().to(crate::web::handlers::return_handlers::adjudicate_return_handler),
          ),
      ),
  );
}
