//! # Storage Implementation
//!
//! Wires the repositories into [`barista_core::Storage`] so the services
//! run directly on a [`Database`].
//!
//! Under method syntax `db.coffees()` and `db.orders()` resolve to the
//! inherent repository accessors; call the trait versions as
//! `Storage::coffees(&db)`.

use barista_core::{
    CoffeeProduct, CoreResult, NewCoffee, NewOrderLine, Order, OrderFilter, Storage,
};

use crate::pool::Database;

impl Storage for Database {
    async fn coffee(&self, id: i64) -> CoreResult<Option<CoffeeProduct>> {
        Ok(self.coffees().get_by_id(id).await?)
    }

    async fn coffees(&self) -> CoreResult<Vec<CoffeeProduct>> {
        Ok(self.coffees().list().await?)
    }

    async fn insert_coffee(&self, coffee: &NewCoffee) -> CoreResult<CoffeeProduct> {
        Ok(self.coffees().insert(coffee).await?)
    }

    async fn create_order_atomic(
        &self,
        total_price: f64,
        lines: &[NewOrderLine],
    ) -> CoreResult<Order> {
        Ok(self.orders().create(total_price, lines).await?)
    }

    async fn orders(&self, filter: &OrderFilter) -> CoreResult<Vec<Order>> {
        Ok(self.orders().list(filter).await?)
    }

    async fn order(&self, id: i64) -> CoreResult<Option<Order>> {
        Ok(self.orders().get_by_id(id).await?)
    }
}
