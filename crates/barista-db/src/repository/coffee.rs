//! # Coffee Repository
//!
//! Database operations for the menu.
//!
//! Coffees are inserted by the seed binary or the administrative insert and
//! never updated: order lines point at them by id and read name and price
//! from here on every lookup.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use barista_core::{CoffeeProduct, NewCoffee};

/// Repository for coffee database operations.
#[derive(Debug, Clone)]
pub struct CoffeeRepository {
    pool: SqlitePool,
}

impl CoffeeRepository {
    /// Creates a new CoffeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CoffeeRepository { pool }
    }

    /// Gets a coffee by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<CoffeeProduct>> {
        let coffee = sqlx::query_as::<_, CoffeeProduct>(
            r#"
            SELECT id, name, price_cents, water_ml, milk_ml, coffee_grounds_g
            FROM coffees
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(coffee)
    }

    /// Lists every coffee ordered by id.
    pub async fn list(&self) -> DbResult<Vec<CoffeeProduct>> {
        let coffees = sqlx::query_as::<_, CoffeeProduct>(
            r#"
            SELECT id, name, price_cents, water_ml, milk_ml, coffee_grounds_g
            FROM coffees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = coffees.len(), "Listed coffees");
        Ok(coffees)
    }

    /// Inserts a new coffee.
    ///
    /// ## Returns
    /// * `Ok(CoffeeProduct)` - Inserted coffee with its generated id
    /// * `Err(DbError::CheckViolation)` - Negative price or ingredient
    pub async fn insert(&self, coffee: &NewCoffee) -> DbResult<CoffeeProduct> {
        debug!(name = %coffee.name, "Inserting coffee");

        let id = sqlx::query(
            r#"
            INSERT INTO coffees (name, price_cents, water_ml, milk_ml, coffee_grounds_g)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&coffee.name)
        .bind(coffee.price_cents)
        .bind(coffee.water_ml)
        .bind(coffee.milk_ml)
        .bind(coffee.coffee_grounds_g)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(CoffeeProduct {
            id,
            name: coffee.name.clone(),
            price_cents: coffee.price_cents,
            water_ml: coffee.water_ml,
            milk_ml: coffee.milk_ml,
            coffee_grounds_g: coffee.coffee_grounds_g,
        })
    }

    /// Counts coffees on the menu.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coffees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
