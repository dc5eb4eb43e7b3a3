// server/src/config.rs

use crate::errors::{ApiError, Result}; // Use ApiError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  /// From-address stamped on order confirmations.
  pub confirmation_sender: String,

  /// Apply embedded migrations before serving.
  pub migrate_on_start: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name)
        .map_err(|e| ApiError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| ApiError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let confirmation_sender =
      get_env("CONFIRMATION_SENDER").unwrap_or_else(|_| "orders@storefront.example".to_string());

    let migrate_on_start = get_env("MIGRATE_ON_START")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| ApiError::Config(format!("Invalid MIGRATE_ON_START value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      confirmation_sender,
      migrate_on_start,
    })
  }
}
