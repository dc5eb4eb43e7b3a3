// server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use storefront_core::OrderService;

#[derive(Clone)]
pub struct AppState {
  pub service: Arc<OrderService>,
  pub config: Arc<AppConfig>, // Share loaded config
}
