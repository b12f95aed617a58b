//! # Domain Types
//!
//! Core domain types and the payload shapes built from them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CoffeeProduct  │   │      Order      │   │    OrderLine    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄┐ │  id             │◄──│  order_id (FK)  │       │
//! │  │  name           │ │ │  created_at     │   │  coffee_id (FK) │──┐    │
//! │  │  price_cents    │ │ │  total_price    │   │  quantity       │  │    │
//! │  │  water_ml ...   │ │ │  status         │   └─────────────────┘  │    │
//! │  └─────────────────┘ │ │  lines (owned)  │                        │    │
//! │                      │ └─────────────────┘                        │    │
//! │                      └────────────── resolved by id ──────────────┘    │
//! │                                                                         │
//! │  Payloads: MenuItem (major units), CoffeeProduct (minor units, admin), │
//! │            OrderView / OrderLineView (resolved names and prices)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line never copies product data. Its name and price are looked up from
//! the catalog each time the order is read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing;

// =============================================================================
// Coffee Product
// =============================================================================

/// A coffee on the menu.
///
/// Serializes in the administrative shape: `price` is integer minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CoffeeProduct {
    pub id: i64,

    /// Display name shown on the menu and on order lines.
    pub name: String,

    /// Price in minor units (cents).
    #[serde(rename = "price")]
    pub price_cents: i64,

    /// Water used per unit sold, in millilitres.
    pub water_ml: i64,

    /// Milk used per unit sold, in millilitres.
    pub milk_ml: i64,

    /// Ground coffee used per unit sold, in grams.
    pub coffee_grounds_g: i64,
}

impl CoffeeProduct {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A coffee to be added to the menu (id assigned by storage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCoffee {
    pub name: String,
    #[serde(rename = "price")]
    pub price_cents: i64,
    pub water_ml: i64,
    pub milk_ml: i64,
    pub coffee_grounds_g: i64,
}

/// Menu entry for display: price in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub water_ml: i64,
    pub milk_ml: i64,
    pub coffee_grounds_g: i64,
}

impl From<&CoffeeProduct> for MenuItem {
    fn from(coffee: &CoffeeProduct) -> Self {
        MenuItem {
            id: coffee.id,
            name: coffee.name.clone(),
            price: pricing::unit_price_major(coffee),
            water_ml: coffee.water_ml,
            milk_ml: coffee.milk_ml,
            coffee_grounds_g: coffee.coffee_grounds_g,
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// Orders are created `Pending`. `Completed` exists so rows written by other
/// tools decode; nothing here moves an order between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed and waiting to be prepared.
    Pending,
    /// Handed over to the customer.
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// A persisted order together with the lines it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    /// Server clock at creation (UTC).
    pub created_at: DateTime<Utc>,
    /// Sum of line prices in major units, fixed at creation.
    pub total_price: f64,
    pub status: OrderStatus,
    /// Lines in id order.
    pub lines: Vec<OrderLine>,
}

/// A line item of an order. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    /// Non-owning reference into the catalog.
    pub coffee_id: i64,
    pub quantity: i64,
}

// =============================================================================
// Order Requests
// =============================================================================

/// One requested `(coffee, quantity)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineRequest {
    pub coffee_id: i64,
    pub quantity: i64,
}

/// Body of an order creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRequest {
    pub items: Vec<LineRequest>,
}

impl OrderRequest {
    pub fn new(items: impl IntoIterator<Item = (i64, i64)>) -> Self {
        OrderRequest {
            items: items
                .into_iter()
                .map(|(coffee_id, quantity)| LineRequest {
                    coffee_id,
                    quantity,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Order Views
// =============================================================================

/// An order with every line resolved against the catalog.
///
/// This is the shape returned by order creation and the pending listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderView {
    pub id: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    /// Major units.
    pub total_price: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderLineView>,
}

/// A resolved order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLineView {
    pub id: i64,
    pub coffee_id: i64,
    pub quantity: i64,
    pub coffee_name: String,
    /// Unit price × quantity, in major units.
    pub item_price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
