//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MINOR UNITS (storage, admin)         MAJOR UNITS (display)             │
//! │                                                                         │
//! │  coffees.price_cents = 450   ──────►  menu price = 4.5                  │
//! │                                                                         │
//! │  All arithmetic happens on integer minor units. A value is converted   │
//! │  to a major-unit float exactly once, at the edge that displays it.     │
//! │                                                                         │
//! │  In floating point:  0.1 + 0.2 = 0.30000000000000004                   │
//! │  In minor units:     10 + 20 = 30  →  0.3                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barista_core::money::Money;
//!
//! let price = Money::from_cents(450);
//! let line = price.multiply_quantity(3).unwrap();
//! assert_eq!(line.cents(), 1350);
//! assert_eq!(line.to_major(), 13.5);
//! ```
//!
//! Arithmetic is checked: quantities have no upper bound, so a product or
//! sum that leaves `i64` comes back as `None` instead of wrapping.

use std::fmt;

use crate::MINOR_UNITS_PER_MAJOR;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units as a float, for display payloads.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(850).to_major(), 8.5);
    /// assert_eq!(Money::zero().to_major(), 0.0);
    /// ```
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity. `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(200);
    /// assert_eq!(unit_price.multiply_quantity(2).map(|m| m.cents()), Some(400));
    /// assert_eq!(unit_price.multiply_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two values. `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering with two decimal places. Frontends format for display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_part().abs(),
            self.minor_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
