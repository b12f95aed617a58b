//! # barista-db: Database Layer for Barista
//!
//! SQLite storage for the menu and orders, implementing
//! [`barista_core::Storage`] so the services run on a [`Database`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barista Data Flow                                │
//! │                                                                         │
//! │  OrderService / ConsumptionAnalyzer / MenuService (barista-core)       │
//! │       │  Storage trait                                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     barista-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ CoffeeRepo    │    │ 001_initial_ │  │   │
//! │  │   │ SqlitePool    │◄───│ OrderRepo     │    │   schema.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (DATABASE_URL, default ./barista.db)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Coffee and order repositories
//! - [`store`] - `Storage` implementation for `Database`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barista_core::{OrderRequest, OrderService};
//! use barista_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./barista.db")).await?;
//! let order = OrderService::new(db.clone())
//!     .create_order(&OrderRequest::new([(1, 2)]))
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::coffee::CoffeeRepository;
pub use repository::order::OrderRepository;
