// core/src/store/mod.rs

//! Persistence seam for order records.
//!
//! [`OrderStore`] is the injected handle the service talks to; implementations
//! are [`postgres::PgOrderStore`] for deployments and [`memory::MemoryOrderStore`]
//! for tests, demos and database-less local runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Order, OrderStatus, ReturnRequest, ReturnStatus};

pub mod memory;
pub mod postgres;

pub use memory::MemoryOrderStore;
pub use postgres::PgOrderStore;

/// Persistent collection of orders.
///
/// Every list operation returns records newest first. Single-record writes are
/// last-writer-wins with no conflict detection; only [`finalize_return`] makes
/// an atomicity promise.
///
/// [`finalize_return`]: OrderStore::finalize_return
#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn insert(&self, order: &Order) -> Result<()>;

  async fn find(&self, id: Uuid) -> Result<Option<Order>>;

  /// All orders, newest first. Administrative read; no ownership filter.
  async fn list_all(&self) -> Result<Vec<Order>>;

  /// Orders whose customer email matches exactly, newest first.
  async fn list_by_email(&self, email: &str) -> Result<Vec<Order>>;

  /// Overwrites the top-level status. `None` when no such order exists.
  async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Option<Order>>;

  /// Attaches a submitted return sub-record. `None` when no such order exists.
  async fn set_return_request(&self, id: Uuid, request: ReturnRequest) -> Result<Option<Order>>;

  /// Guarded adjudication write. In one transaction: load the order (absent
  /// means [`OrderError::NotFound`]), require a submitted return (otherwise
  /// [`OrderError::NoReturnRequested`]), then write the verdict,
  /// `processed_at` and, when the caller couples them, the top-level status as
  /// a single atomic update. No reader may observe the verdict without the
  /// coupled status or vice versa.
  ///
  /// [`OrderError::NotFound`]: crate::error::OrderError::NotFound
  /// [`OrderError::NoReturnRequested`]: crate::error::OrderError::NoReturnRequested
  async fn finalize_return(
    &self,
    id: Uuid,
    verdict: ReturnStatus,
    processed_at: DateTime<Utc>,
    order_status: Option<OrderStatus>,
  ) -> Result<Order>;
}
