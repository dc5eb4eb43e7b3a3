// core/src/store/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{OrderError, Result};
use crate::models::{Order, OrderStatus, ReturnRequest, ReturnStatus};
use crate::store::OrderStore;

/// Embedded schema migrations; the server runs these on startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Order store over a Postgres pool. Line items, the shipping address and the
/// return sub-record are stored as JSONB documents; the two status fields are
/// Postgres enum types declared in the migrations.
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  async fn insert(&self, order: &Order) -> Result<()> {
    sqlx::query(
      "INSERT INTO orders \
         (id, items, email, shipping_address, payment_method, \
          subtotal, shipping, tax, total, \
          status, payment_status, created_at, return_request) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(order.id)
    .bind(Json(&order.items))
    .bind(&order.email)
    .bind(order.shipping_address.as_ref().map(Json))
    .bind(&order.payment_method)
    .bind(order.subtotal)
    .bind(order.shipping)
    .bind(order.tax)
    .bind(order.total)
    .bind(order.status)
    .bind(order.payment_status)
    .bind(order.created_at)
    .bind(order.return_request.as_ref().map(Json))
    .execute(&self.pool)
    .await?;
    Ok(())
  }

  async fn find(&self, id: Uuid) -> Result<Option<Order>> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(order)
  }

  async fn list_all(&self) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC")
      .fetch_all(&self.pool)
      .await?;
    Ok(orders)
  }

  async fn list_by_email(&self, email: &str) -> Result<Vec<Order>> {
    let orders =
      sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE email = $1 ORDER BY created_at DESC")
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
    Ok(orders)
  }

  async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Option<Order>> {
    let order =
      sqlx::query_as::<_, Order>("UPDATE orders SET status = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
    Ok(order)
  }

  async fn set_return_request(&self, id: Uuid, request: ReturnRequest) -> Result<Option<Order>> {
    let order =
      sqlx::query_as::<_, Order>("UPDATE orders SET return_request = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(Json(&request))
        .fetch_optional(&self.pool)
        .await?;
    Ok(order)
  }

  async fn finalize_return(
    &self,
    id: Uuid,
    verdict: ReturnStatus,
    processed_at: DateTime<Utc>,
    order_status: Option<OrderStatus>,
  ) -> Result<Order> {
    let mut tx = self.pool.begin().await?;

    // Row lock holds off a concurrent adjudication of the same order until
    // this one commits. Dropping `tx` on any error path rolls back.
    let Some(order) = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 FOR UPDATE")
      .bind(id)
      .fetch_optional(&mut *tx)
      .await?
    else {
      return Err(OrderError::NotFound(id));
    };

    let mut request = order
      .return_request
      .filter(|r| r.requested)
      .ok_or(OrderError::NoReturnRequested)?;
    request.status = verdict;
    request.processed_at = Some(processed_at);

    let updated = match order_status {
      Some(status) => {
        sqlx::query_as::<_, Order>(
          "UPDATE orders SET return_request = $2, status = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(&request))
        .bind(status)
        .fetch_one(&mut *tx)
        .await?
      }
      None => {
        sqlx::query_as::<_, Order>(
          "UPDATE orders SET return_request = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(&request))
        .fetch_one(&mut *tx)
        .await?
      }
    };

    tx.commit().await?;
    Ok(updated)
  }
}
