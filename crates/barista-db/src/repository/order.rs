//! # Order Repository
//!
//! Database operations for orders and their line items.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEGIN                                                                  │
//! │    INSERT INTO orders (created_at, total_price, status)  → order id    │
//! │    INSERT INTO order_items (order_id, coffee_id, quantity)  × N        │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Any failure (e.g. FOREIGN KEY on coffee_id) drops the transaction     │
//! │  and rolls back the header with it.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! Headers and lines are read in two queries inside one transaction, so a
//! concurrent writer can't slip lines in between them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use barista_core::{NewOrderLine, Order, OrderFilter, OrderLine, OrderStatus};

/// Header row of the `orders` table.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    created_at: DateTime<Utc>,
    total_price: f64,
    status: OrderStatus,
}

impl OrderRow {
    fn into_order(self, lines: Vec<OrderLine>) -> Order {
        Order {
            id: self.id,
            created_at: self.created_at,
            total_price: self.total_price,
            status: self.status,
            lines,
        }
    }
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Writes a pending order and all its lines in one transaction.
    ///
    /// ## Returns
    /// * `Ok(Order)` - The stored order, lines in insertion order
    /// * `Err(DbError::ForeignKeyViolation)` - A line names a missing coffee;
    ///   nothing was written
    pub async fn create(&self, total_price: f64, lines: &[NewOrderLine]) -> DbResult<Order> {
        let created_at = Utc::now();
        let status = OrderStatus::Pending;

        let mut tx = self.pool.begin().await?;

        let order_id = sqlx::query(
            r#"
            INSERT INTO orders (created_at, total_price, status)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(created_at)
        .bind(total_price)
        .bind(status)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let mut stored = Vec::with_capacity(lines.len());
        for line in lines {
            let line_id = sqlx::query(
                r#"
                INSERT INTO order_items (order_id, coffee_id, quantity)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(order_id)
            .bind(line.coffee_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            stored.push(OrderLine {
                id: line_id,
                order_id,
                coffee_id: line.coffee_id,
                quantity: line.quantity,
            });
        }

        tx.commit().await?;

        debug!(order_id, lines = stored.len(), total_price, "Order stored");

        Ok(Order {
            id: order_id,
            created_at,
            total_price,
            status,
            lines: stored,
        })
    }

    /// Lists orders passing `filter`, ordered by id, lines ordered by id.
    pub async fn list(&self, filter: &OrderFilter) -> DbResult<Vec<Order>> {
        let mut tx = self.pool.begin().await?;

        let headers = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, created_at, total_price, status
            FROM orders
            WHERE (?1 IS NULL OR status = ?1)
              AND (?2 IS NULL OR created_at >= ?2)
            ORDER BY id
            "#,
        )
        .bind(filter.status)
        .bind(filter.created_since)
        .fetch_all(&mut *tx)
        .await?;

        let lines = sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT i.id, i.order_id, i.coffee_id, i.quantity
            FROM order_items i
            INNER JOIN orders o ON o.id = i.order_id
            WHERE (?1 IS NULL OR o.status = ?1)
              AND (?2 IS NULL OR o.created_at >= ?2)
            ORDER BY i.id
            "#,
        )
        .bind(filter.status)
        .bind(filter.created_since)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut by_order: HashMap<i64, Vec<OrderLine>> = HashMap::new();
        for line in lines {
            by_order.entry(line.order_id).or_default().push(line);
        }

        let orders: Vec<Order> = headers
            .into_iter()
            .map(|row| {
                let lines = by_order.remove(&row.id).unwrap_or_default();
                row.into_order(lines)
            })
            .collect();

        debug!(count = orders.len(), ?filter, "Listed orders");
        Ok(orders)
    }

    /// Gets an order with its lines.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let mut tx = self.pool.begin().await?;

        let header = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, created_at, total_price, status
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let lines = sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT id, order_id, coffee_id, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(header.into_order(lines)))
    }

    /// Counts stored orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
