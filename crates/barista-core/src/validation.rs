//! # Validation Module
//!
//! Input validation for Barista.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (barista-api)                                 │
//! │  ├── Type validation (deserialization, missing fields)                 │
//! │  └── Rejections become 422 responses                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Called by the API for query parameters                            │
//! │  └── Called again by the services before touching storage              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK constraints (quantity >= 1, price >= 0)                     │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{NewCoffee, OrderRequest};
use crate::{MAX_COFFEE_NAME_LEN, MAX_WINDOW_DAYS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a coffee name: non-empty after trimming, at most 200 characters.
///
/// ## Example
/// ```rust
/// use barista_core::validation::validate_coffee_name;
///
/// assert!(validate_coffee_name("Flat White").is_ok());
/// assert!(validate_coffee_name("   ").is_err());
/// ```
pub fn validate_coffee_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_COFFEE_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_COFFEE_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Zero is allowed.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    validate_non_negative("price", cents)
}

/// Validates an ingredient quantity (ml or g). Zero is allowed.
pub fn validate_ingredient(field: &str, amount: i64) -> ValidationResult<()> {
    validate_non_negative(field, amount)
}

/// Validates every field of a coffee before it is added to the menu.
pub fn validate_new_coffee(coffee: &NewCoffee) -> ValidationResult<()> {
    validate_coffee_name(&coffee.name)?;
    validate_price_cents(coffee.price_cents)?;
    validate_ingredient("water_ml", coffee.water_ml)?;
    validate_ingredient("milk_ml", coffee.milk_ml)?;
    validate_ingredient("coffee_grounds_g", coffee.coffee_grounds_g)?;
    Ok(())
}

fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a line quantity: must be at least 1.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates every line of an order request. An empty request is valid.
pub fn validate_order_request(request: &OrderRequest) -> ValidationResult<()> {
    request
        .items
        .iter()
        .try_for_each(|line| validate_quantity(line.quantity))
}

// =============================================================================
// Consumption Validators
// =============================================================================

/// Validates a consumption window length and returns it as a day count.
///
/// ## Rules
/// - At least 1 (the averages divide by it)
/// - At most `MAX_WINDOW_DAYS`
///
/// ## Example
/// ```rust
/// use barista_core::validation::validate_window_days;
///
/// assert_eq!(validate_window_days(7).unwrap(), 7);
/// assert!(validate_window_days(0).is_err());
/// assert!(validate_window_days(-3).is_err());
/// ```
pub fn validate_window_days(days: i64) -> ValidationResult<u32> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(ValidationError::OutOfRange {
            field: "days".to_string(),
            min: 1,
            max: MAX_WINDOW_DAYS,
        });
    }

    u32::try_from(days).map_err(|_| ValidationError::OutOfRange {
        field: "days".to_string(),
        min: 1,
        max: MAX_WINDOW_DAYS,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
