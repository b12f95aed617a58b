//! # Pricing Engine
//!
//! Canonical price arithmetic and unit conversion.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoffeeProduct.price_cents ──► line_total (Money) ──► order_total_cents│
//! │           │                          │                       │          │
//! │           ▼                          ▼                       ▼          │
//! │  unit_price_major (f64)       line_price (f64)        order_total (f64)│
//! │                                                                         │
//! │  Minor units are summed as integers; each f64 is produced by a single  │
//! │  division by MINOR_UNITS_PER_MAJOR. Overflow is a TooLarge error.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::CoffeeProduct;

fn quantity_too_large() -> ValidationError {
    ValidationError::TooLarge {
        field: "quantity".to_string(),
    }
}

/// Price of one unit in major units.
#[inline]
pub fn unit_price_major(coffee: &CoffeeProduct) -> f64 {
    coffee.price().to_major()
}

/// Price of `quantity` units in minor units.
#[inline]
pub fn line_total(coffee: &CoffeeProduct, quantity: i64) -> CoreResult<Money> {
    Ok(coffee
        .price()
        .multiply_quantity(quantity)
        .ok_or_else(quantity_too_large)?)
}

/// Price of `quantity` units in major units.
///
/// ## Example
/// ```rust
/// use barista_core::{pricing, CoffeeProduct};
///
/// let cappuccino = CoffeeProduct {
///     id: 13,
///     name: "Cappuccino".to_string(),
///     price_cents: 450,
///     water_ml: 30,
///     milk_ml: 120,
///     coffee_grounds_g: 15,
/// };
/// assert_eq!(pricing::line_price(&cappuccino, 1).unwrap(), 4.5);
/// ```
#[inline]
pub fn line_price(coffee: &CoffeeProduct, quantity: i64) -> CoreResult<f64> {
    Ok(line_total(coffee, quantity)?.to_major())
}

/// Sum of line totals in minor units. An empty order totals zero.
///
/// ## Errors
/// - `Validation(TooLarge)` if a line or the running sum overflows
pub fn order_total_cents<'a, I>(lines: I) -> CoreResult<Money>
where
    I: IntoIterator<Item = (&'a CoffeeProduct, i64)>,
{
    lines
        .into_iter()
        .try_fold(Money::zero(), |total, (coffee, quantity)| -> CoreResult<Money> {
            let line = line_total(coffee, quantity)?;
            Ok(total.checked_add(line).ok_or_else(quantity_too_large)?)
        })
}

/// Sum of line prices in major units. An empty order totals exactly `0.0`.
pub fn order_total<'a, I>(lines: I) -> CoreResult<f64>
where
    I: IntoIterator<Item = (&'a CoffeeProduct, i64)>,
{
    Ok(order_total_cents(lines)?.to_major())
}

// =============================================================================
// Unit Tests
// =============================================================================
