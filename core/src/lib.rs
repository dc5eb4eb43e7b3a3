// core/src/lib.rs

//! Storefront order lifecycle library.
//!
//! Everything HTTP-independent lives here:
//!  - Order, line-item, shipping-address and return-request models with their
//!    closed status vocabularies.
//!  - The [`store::OrderStore`] persistence trait, with in-memory and
//!    Postgres implementations.
//!  - [`service::OrderService`], which owns the lifecycle rules: creation
//!    validation, status overwrites, the 30-day return window and the
//!    transactionally coupled return adjudication.
//!  - The [`notify::ConfirmationSender`] seam for fire-and-forget order
//!    confirmation.

pub mod error;
pub mod models;
pub mod notify;
pub mod service;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{ErrorCategory, OrderError, Result};
pub use crate::models::{
  LineItem, Order, OrderDraft, OrderStatus, PaymentStatus, ReturnRequest, ReturnStatus,
  ShippingAddress,
};
pub use crate::notify::{ConfirmationSender, MockEmailSender};
pub use crate::service::{OrderService, RETURN_WINDOW_DAYS};
pub use crate::store::{MemoryOrderStore, OrderStore, PgOrderStore};
