//! # Catalog
//!
//! In-memory index of coffees by id, built once per request from the
//! storage layer and used to resolve order lines into display rows.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::pricing;
use crate::types::{CoffeeProduct, Order, OrderLine, OrderLineView, OrderView};

/// Coffees indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    coffees: HashMap<i64, CoffeeProduct>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Adds (or replaces) a coffee.
    pub fn insert(&mut self, coffee: CoffeeProduct) {
        self.coffees.insert(coffee.id, coffee);
    }

    pub fn get(&self, id: i64) -> Option<&CoffeeProduct> {
        self.coffees.get(&id)
    }

    /// Looks up the coffee a stored line points at.
    pub fn coffee_for(&self, line: &OrderLine) -> CoreResult<&CoffeeProduct> {
        self.get(line.coffee_id).ok_or(CoreError::MissingCoffee {
            line_id: line.id,
            coffee_id: line.coffee_id,
        })
    }

    /// Resolves a single line: name and price come from the catalog.
    pub fn resolve_line(&self, line: &OrderLine) -> CoreResult<OrderLineView> {
        let coffee = self.coffee_for(line)?;
        Ok(OrderLineView {
            id: line.id,
            coffee_id: line.coffee_id,
            quantity: line.quantity,
            coffee_name: coffee.name.clone(),
            item_price: pricing::line_price(coffee, line.quantity)?,
        })
    }

    /// Resolves every line of an order. The stored total is kept as-is.
    pub fn resolve_order(&self, order: &Order) -> CoreResult<OrderView> {
        let items = order
            .lines
            .iter()
            .map(|line| self.resolve_line(line))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(OrderView {
            id: order.id,
            created_at: order.created_at,
            total_price: order.total_price,
            status: order.status,
            items,
        })
    }
}

impl FromIterator<CoffeeProduct> for Catalog {
    fn from_iter<I: IntoIterator<Item = CoffeeProduct>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for coffee in iter {
            catalog.insert(coffee);
        }
        catalog
    }
}
