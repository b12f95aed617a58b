//! # Consumption Analyzer
//!
//! Aggregates ingredient usage over a trailing window of days.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   now - days ──────────────────────────────────────────────► now       │
//! │   [ every order created in here, any status ]                          │
//! │                                                                         │
//! │   for each line:                                                        │
//! │     coffees          += quantity                                        │
//! │     water_ml         += coffee.water_ml         × quantity              │
//! │     milk_ml          += coffee.milk_ml          × quantity              │
//! │     coffee_grounds_g += coffee.coffee_grounds_g × quantity              │
//! │                                                                         │
//! │   daily average = total / days                                          │
//! │   a total that leaves i64 is a TooLarge error, never a wrap            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::store::{OrderFilter, Storage};
use crate::types::CoffeeProduct;
use crate::validation;
use crate::MAX_WINDOW_DAYS;

// =============================================================================
// Report Types
// =============================================================================

/// Ingredient usage over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsumptionReport {
    pub period_days: u32,
    pub total_coffees: i64,
    pub total_water_ml: i64,
    pub total_milk_ml: i64,
    pub total_coffee_grounds_g: i64,
    pub daily_averages: DailyAverages,
}

/// Totals divided by the window length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyAverages {
    pub coffees: f64,
    pub water_ml: f64,
    pub milk_ml: f64,
    pub coffee_grounds_g: f64,
}

// =============================================================================
// Tally
// =============================================================================

/// Running ingredient totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumptionTally {
    pub coffees: i64,
    pub water_ml: i64,
    pub milk_ml: i64,
    pub coffee_grounds_g: i64,
}

/// `total + per_unit × quantity`, or `TooLarge { field }` on overflow.
fn accumulate(total: i64, per_unit: i64, quantity: i64, field: &str) -> CoreResult<i64> {
    per_unit
        .checked_mul(quantity)
        .and_then(|used| total.checked_add(used))
        .ok_or_else(|| {
            CoreError::Validation(ValidationError::TooLarge {
                field: field.to_string(),
            })
        })
}

impl ConsumptionTally {
    /// Adds `quantity` units of `coffee`. On error the tally is unchanged.
    pub fn record(&mut self, coffee: &CoffeeProduct, quantity: i64) -> CoreResult<()> {
        *self = ConsumptionTally {
            coffees: accumulate(self.coffees, 1, quantity, "coffees")?,
            water_ml: accumulate(self.water_ml, coffee.water_ml, quantity, "water_ml")?,
            milk_ml: accumulate(self.milk_ml, coffee.milk_ml, quantity, "milk_ml")?,
            coffee_grounds_g: accumulate(
                self.coffee_grounds_g,
                coffee.coffee_grounds_g,
                quantity,
                "coffee_grounds_g",
            )?,
        };
        Ok(())
    }

    /// Finishes the tally into a report for a window of `days` days.
    pub fn into_report(self, days: u32) -> ConsumptionReport {
        let per_day = |total: i64| total as f64 / f64::from(days);

        ConsumptionReport {
            period_days: days,
            total_coffees: self.coffees,
            total_water_ml: self.water_ml,
            total_milk_ml: self.milk_ml,
            total_coffee_grounds_g: self.coffee_grounds_g,
            daily_averages: DailyAverages {
                coffees: per_day(self.coffees),
                water_ml: per_day(self.water_ml),
                milk_ml: per_day(self.milk_ml),
                coffee_grounds_g: per_day(self.coffee_grounds_g),
            },
        }
    }
}

/// Start of a window of `days` days ending at `now`.
pub fn window_start(now: DateTime<Utc>, days: u32) -> CoreResult<DateTime<Utc>> {
    now.checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            CoreError::Validation(ValidationError::OutOfRange {
                field: "days".to_string(),
                min: 1,
                max: MAX_WINDOW_DAYS,
            })
        })
}

// =============================================================================
// Analyzer
// =============================================================================

/// Computes consumption reports from stored orders.
#[derive(Debug, Clone)]
pub struct ConsumptionAnalyzer<S> {
    store: S,
}

impl<S: Storage> ConsumptionAnalyzer<S> {
    pub fn new(store: S) -> Self {
        ConsumptionAnalyzer { store }
    }

    /// Usage over the `days` days ending now.
    ///
    /// ## Errors
    /// - `Validation` if `days` is outside `1..=MAX_WINDOW_DAYS`
    /// - `Validation(TooLarge)` if a total overflows `i64`
    pub async fn analyze(&self, days: i64) -> CoreResult<ConsumptionReport> {
        self.analyze_at(days, Utc::now()).await
    }

    /// Usage over the `days` days ending at `now`.
    pub async fn analyze_at(&self, days: i64, now: DateTime<Utc>) -> CoreResult<ConsumptionReport> {
        let days = validation::validate_window_days(days)?;
        let since = window_start(now, days)?;

        let orders = self.store.orders(&OrderFilter::since(since)).await?;
        let mut tally = ConsumptionTally::default();

        if !orders.is_empty() {
            let catalog: Catalog = self.store.coffees().await?.into_iter().collect();
            for line in orders.iter().flat_map(|o| &o.lines) {
                tally.record(catalog.coffee_for(line)?, line.quantity)?;
            }
        }

        debug!(
            days,
            orders = orders.len(),
            coffees = tally.coffees,
            "Consumption analyzed"
        );

        Ok(tally.into_report(days))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
