//! # Order Service
//!
//! Creates orders and reads them back with every line resolved.
//!
//! ## Order Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderRequest { items: [(coffee_id, quantity), ...] }                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Validate quantities (>= 1)            ──► Validation error         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Look up every coffee                  ──► UnknownCoffee(id)        │
//! │       │                                       (nothing persisted)      │
//! │       ▼                                                                 │
//! │  3. Total = Σ unit price × quantity (minor units, one conversion)      │
//! │     overflow ──► Validation(TooLarge), nothing persisted               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Storage::create_order_atomic (header + lines, one transaction)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. Resolve lines against the catalog ──► OrderView                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::pricing;
use crate::store::{NewOrderLine, OrderFilter, Storage};
use crate::types::{OrderRequest, OrderView};
use crate::validation;

/// Order creation and retrieval over a [`Storage`] backend.
#[derive(Debug, Clone)]
pub struct OrderService<S> {
    store: S,
}

impl<S: Storage> OrderService<S> {
    pub fn new(store: S) -> Self {
        OrderService { store }
    }

    /// Places an order.
    ///
    /// Every line must reference an existing coffee and carry a quantity of
    /// at least 1. An empty request creates an order with total `0.0`.
    ///
    /// ## Errors
    /// - `Validation` if any quantity is below 1
    /// - `UnknownCoffee(id)` for the first line whose coffee does not exist
    /// - `Validation(TooLarge)` if a line or the total overflows `i64` cents
    /// - `Storage` if the write fails; no partial order remains
    pub async fn create_order(&self, request: &OrderRequest) -> CoreResult<OrderView> {
        validation::validate_order_request(request)?;

        let mut catalog = Catalog::new();
        for line in &request.items {
            if catalog.get(line.coffee_id).is_some() {
                continue;
            }
            let coffee = self
                .store
                .coffee(line.coffee_id)
                .await?
                .ok_or(CoreError::UnknownCoffee(line.coffee_id))?;
            catalog.insert(coffee);
        }

        let priced = request
            .items
            .iter()
            .map(|line| {
                catalog
                    .get(line.coffee_id)
                    .map(|coffee| (coffee, line.quantity))
                    .ok_or(CoreError::UnknownCoffee(line.coffee_id))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        let total = pricing::order_total_cents(priced)?;

        let lines: Vec<NewOrderLine> = request
            .items
            .iter()
            .map(|line| NewOrderLine {
                coffee_id: line.coffee_id,
                quantity: line.quantity,
            })
            .collect();

        let order = self
            .store
            .create_order_atomic(total.to_major(), &lines)
            .await?;

        info!(
            order_id = order.id,
            lines = order.lines.len(),
            total = %total,
            "Order created"
        );

        catalog.resolve_order(&order)
    }

    /// Every pending order, oldest id first, with lines resolved.
    pub async fn pending_orders(&self) -> CoreResult<Vec<OrderView>> {
        let orders = self.store.orders(&OrderFilter::pending()).await?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let catalog: Catalog = self.store.coffees().await?.into_iter().collect();
        debug!(count = orders.len(), "Resolving pending orders");

        orders
            .iter()
            .map(|order| catalog.resolve_order(order))
            .collect()
    }

    /// One order by id, resolved. `None` if it does not exist.
    pub async fn order_by_id(&self, id: i64) -> CoreResult<Option<OrderView>> {
        let Some(order) = self.store.order(id).await? else {
            return Ok(None);
        };

        let catalog: Catalog = self.store.coffees().await?.into_iter().collect();
        catalog.resolve_order(&order).map(Some)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
