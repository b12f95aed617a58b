//! # Storage Interface
//!
//! What the services need from persistence. `barista-db` implements it on
//! top of SQLite; the unit tests in this crate use an in-memory map.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   OrderService ─────┐                                                  │
//! │                     ├──► Storage ──► barista-db::Database (SQLite)      │
//! │   ConsumptionAnalyzer┘                                                  │
//! │                                                                         │
//! │   create_order_atomic: header + every line in ONE transaction.         │
//! │   A failure leaves no trace of the order.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::CoreResult;
use crate::types::{CoffeeProduct, NewCoffee, Order, OrderStatus};

/// A line to be written as part of a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLine {
    pub coffee_id: i64,
    pub quantity: i64,
}

/// Which orders to read back.
///
/// Both bounds are optional and combine with AND. `created_since` is
/// inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub created_since: Option<DateTime<Utc>>,
}

impl OrderFilter {
    /// Every order.
    pub fn all() -> Self {
        OrderFilter::default()
    }

    /// Orders still waiting to be prepared.
    pub fn pending() -> Self {
        OrderFilter {
            status: Some(OrderStatus::Pending),
            created_since: None,
        }
    }

    /// Orders created at or after `since`, any status.
    pub fn since(since: DateTime<Utc>) -> Self {
        OrderFilter {
            status: None,
            created_since: Some(since),
        }
    }

    /// Whether an order passes this filter. Mirrors the `WHERE` clause of
    /// the SQLite order listing.
    #[cfg(test)]
    pub(crate) fn matches(&self, order: &Order) -> bool {
        self.status.map_or(true, |status| order.status == status)
            && self
                .created_since
                .map_or(true, |since| order.created_at >= since)
    }
}

/// Persistence operations used by the services.
pub trait Storage: Send + Sync {
    /// Looks up one coffee.
    fn coffee(&self, id: i64) -> impl Future<Output = CoreResult<Option<CoffeeProduct>>> + Send;

    /// Every coffee, ordered by id.
    fn coffees(&self) -> impl Future<Output = CoreResult<Vec<CoffeeProduct>>> + Send;

    /// Adds a coffee to the menu and returns it with its assigned id.
    fn insert_coffee(
        &self,
        coffee: &NewCoffee,
    ) -> impl Future<Output = CoreResult<CoffeeProduct>> + Send;

    /// Writes a pending order and its lines atomically, stamping it with the
    /// current server time. Returns the stored order with assigned ids.
    fn create_order_atomic(
        &self,
        total_price: f64,
        lines: &[NewOrderLine],
    ) -> impl Future<Output = CoreResult<Order>> + Send;

    /// Orders passing `filter`, with their lines, ordered by id.
    fn orders(&self, filter: &OrderFilter) -> impl Future<Output = CoreResult<Vec<Order>>> + Send;

    /// One order with its lines.
    fn order(&self, id: i64) -> impl Future<Output = CoreResult<Option<Order>>> + Send;
}

impl<T: Storage> Storage for Arc<T> {
    fn coffee(&self, id: i64) -> impl Future<Output = CoreResult<Option<CoffeeProduct>>> + Send {
        (**self).coffee(id)
    }

    fn coffees(&self) -> impl Future<Output = CoreResult<Vec<CoffeeProduct>>> + Send {
        (**self).coffees()
    }

    fn insert_coffee(
        &self,
        coffee: &NewCoffee,
    ) -> impl Future<Output = CoreResult<CoffeeProduct>> + Send {
        (**self).insert_coffee(coffee)
    }

    fn create_order_atomic(
        &self,
        total_price: f64,
        lines: &[NewOrderLine],
    ) -> impl Future<Output = CoreResult<Order>> + Send {
        (**self).create_order_atomic(total_price, lines)
    }

    fn orders(&self, filter: &OrderFilter) -> impl Future<Output = CoreResult<Vec<Order>>> + Send {
        (**self).orders(filter)
    }

    fn order(&self, id: i64) -> impl Future<Output = CoreResult<Option<Order>>> + Send {
        (**self).order(id)
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod memory {
    //! Map-backed storage for unit tests.

    use std::sync::Mutex;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::error::CoreError;
    use crate::types::OrderLine;

    #[derive(Default)]
    struct State {
        coffees: Vec<CoffeeProduct>,
        orders: Vec<Order>,
        next_line_id: i64,
        fail_writes: bool,
    }

    #[derive(Default)]
    pub struct MemoryStore {
        state: Mutex<State>,
    }

    impl MemoryStore {
        pub fn with_menu() -> Self {
            let store = MemoryStore::default();
            for (id, name, price, water, milk, grounds) in [
                (11, "Expresso", 200, 50, 0, 15),
                (12, "Expresso Duplo", 300, 100, 0, 30),
                (13, "Cappuccino", 450, 30, 120, 15),
                (14, "Flat White", 550, 30, 150, 15),
                (15, "Americano", 350, 100, 0, 15),
            ] {
                store.add_coffee(CoffeeProduct {
                    id,
                    name: name.to_string(),
                    price_cents: price,
                    water_ml: water,
                    milk_ml: milk,
                    coffee_grounds_g: grounds,
                });
            }
            store
        }

        pub fn add_coffee(&self, coffee: CoffeeProduct) {
            self.state.lock().unwrap().coffees.push(coffee);
        }

        pub fn remove_coffee(&self, id: i64) {
            self.state.lock().unwrap().coffees.retain(|c| c.id != id);
        }

        pub fn fail_writes(&self) {
            self.state.lock().unwrap().fail_writes = true;
        }

        pub fn order_count(&self) -> usize {
            self.state.lock().unwrap().orders.len()
        }

        /// Inserts an order directly, bypassing the service.
        pub fn insert_order(
            &self,
            created_at: DateTime<Utc>,
            status: OrderStatus,
            lines: &[(i64, i64)],
        ) -> i64 {
            let mut state = self.state.lock().unwrap();
            let id = state.orders.len() as i64 + 1;
            let mut order_lines = Vec::new();
            for &(coffee_id, quantity) in lines {
                state.next_line_id += 1;
                order_lines.push(OrderLine {
                    id: state.next_line_id,
                    order_id: id,
                    coffee_id,
                    quantity,
                });
            }
            state.orders.push(Order {
                id,
                created_at,
                total_price: 0.0,
                status,
                lines: order_lines,
            });
            id
        }
    }

    impl Storage for MemoryStore {
        async fn coffee(&self, id: i64) -> CoreResult<Option<CoffeeProduct>> {
            let state = self.state.lock().unwrap();
            Ok(state.coffees.iter().find(|c| c.id == id).cloned())
        }

        async fn coffees(&self) -> CoreResult<Vec<CoffeeProduct>> {
            let mut coffees = self.state.lock().unwrap().coffees.clone();
            coffees.sort_by_key(|c| c.id);
            Ok(coffees)
        }

        async fn insert_coffee(&self, coffee: &NewCoffee) -> CoreResult<CoffeeProduct> {
            let mut state = self.state.lock().unwrap();
            let id = state.coffees.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            let coffee = CoffeeProduct {
                id,
                name: coffee.name.clone(),
                price_cents: coffee.price_cents,
                water_ml: coffee.water_ml,
                milk_ml: coffee.milk_ml,
                coffee_grounds_g: coffee.coffee_grounds_g,
            };
            state.coffees.push(coffee.clone());
            Ok(coffee)
        }

        async fn create_order_atomic(
            &self,
            total_price: f64,
            lines: &[NewOrderLine],
        ) -> CoreResult<Order> {
            let mut state = self.state.lock().unwrap();
            if state.fail_writes {
                return Err(CoreError::Storage("write rejected".to_string()));
            }

            let id = state.orders.len() as i64 + 1;
            let mut order_lines = Vec::with_capacity(lines.len());
            for line in lines {
                state.next_line_id += 1;
                order_lines.push(OrderLine {
                    id: state.next_line_id,
                    order_id: id,
                    coffee_id: line.coffee_id,
                    quantity: line.quantity,
                });
            }

            let order = Order {
                id,
                created_at: Utc::now(),
                total_price,
                status: OrderStatus::Pending,
                lines: order_lines,
            };
            state.orders.push(order.clone());
            Ok(order)
        }

        async fn orders(&self, filter: &OrderFilter) -> CoreResult<Vec<Order>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .orders
                .iter()
                .filter(|o| filter.matches(o))
                .cloned()
                .collect())
        }

        async fn order(&self, id: i64) -> CoreResult<Option<Order>> {
            let state = self.state.lock().unwrap();
            Ok(state.orders.iter().find(|o| o.id == id).cloned())
        }
    }
}
