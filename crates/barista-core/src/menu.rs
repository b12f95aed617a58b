//! # Menu Service
//!
//! The two catalog listings and the administrative insert.
//!
//! | Listing     | Type            | `price`                 |
//! |-------------|-----------------|-------------------------|
//! | `menu()`    | `MenuItem`      | major units, `f64`      |
//! | `catalog()` | `CoffeeProduct` | minor units, `i64`      |

use tracing::info;

use crate::error::CoreResult;
use crate::store::Storage;
use crate::types::{CoffeeProduct, MenuItem, NewCoffee};
use crate::validation;

/// Catalog reads and inserts over a [`Storage`] backend.
#[derive(Debug, Clone)]
pub struct MenuService<S> {
    store: S,
}

impl<S: Storage> MenuService<S> {
    pub fn new(store: S) -> Self {
        MenuService { store }
    }

    /// The display menu, ordered by id.
    pub async fn menu(&self) -> CoreResult<Vec<MenuItem>> {
        let coffees = self.store.coffees().await?;
        Ok(coffees.iter().map(MenuItem::from).collect())
    }

    /// Every coffee with its price in minor units, ordered by id.
    pub async fn catalog(&self) -> CoreResult<Vec<CoffeeProduct>> {
        self.store.coffees().await
    }

    /// Validates and adds a coffee.
    pub async fn create_coffee(&self, coffee: &NewCoffee) -> CoreResult<CoffeeProduct> {
        validation::validate_new_coffee(coffee)?;

        let mut coffee = coffee.clone();
        coffee.name = coffee.name.trim().to_string();

        let created = self.store.insert_coffee(&coffee).await?;
        info!(id = created.id, name = %created.name, "Coffee added to menu");
        Ok(created)
    }
}
