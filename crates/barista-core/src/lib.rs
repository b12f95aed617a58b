//! # barista-core: Pure Business Logic for Barista
//!
//! Pricing, order creation and ingredient-consumption analysis for a coffee
//! shop. Nothing in this crate touches a database or the network: storage is
//! the [`store::Storage`] trait, implemented by `barista-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barista Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (barista-api)                       │   │
//! │  │    /menu  /menu/all  /orders  /orders/pending  /consumption     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ barista-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │  orders   │  │consumption│  │ validation│  │   │
//! │  │   │  Money    │  │OrderSvc   │  │ Analyzer  │  │   rules   │  │   │
//! │  │   └───────────┘  └─────┬─────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                        └──── Storage ─┘ (trait)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  barista-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, Storage implementation     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CoffeeProduct, Order, OrderLine) and payloads
//! - [`money`] - Integer minor-unit money
//! - [`pricing`] - Unit, line and order prices
//! - [`catalog`] - Id-indexed coffee lookup used to resolve order lines
//! - [`store`] - Storage interface consumed by the services
//! - [`menu`] - Menu Service (listings, administrative inserts)
//! - [`orders`] - Order Service
//! - [`consumption`] - Consumption Analyzer
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::{pricing, CoffeeProduct};
//!
//! let expresso = CoffeeProduct {
//!     id: 11,
//!     name: "Expresso".to_string(),
//!     price_cents: 200,
//!     water_ml: 50,
//!     milk_ml: 0,
//!     coffee_grounds_g: 15,
//! };
//!
//! assert_eq!(pricing::unit_price_major(&expresso), 2.0);
//! assert_eq!(pricing::line_price(&expresso, 2).unwrap(), 4.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod consumption;
pub mod error;
pub mod menu;
pub mod money;
pub mod orders;
pub mod pricing;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use consumption::{ConsumptionAnalyzer, ConsumptionReport, DailyAverages};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::MenuService;
pub use money::Money;
pub use orders::OrderService;
pub use store::{NewOrderLine, OrderFilter, Storage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minor currency units per major unit (cents per real/dollar).
///
/// Every conversion between stored integer prices and displayed decimal
/// prices goes through this constant.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Longest consumption window accepted, in days.
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// Maximum length of a coffee name.
pub const MAX_COFFEE_NAME_LEN: usize = 200;
