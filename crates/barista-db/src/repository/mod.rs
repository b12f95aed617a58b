//! # Repository Module
//!
//! Database repository implementations for Barista.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Service (barista-core)                                                │
//! │       │                                                                 │
//! │       │  Storage::create_order_atomic(total, lines)                    │
//! │       ▼                                                                 │
//! │  Database (store.rs) ──► db.orders().create(total, lines)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── create(&self, total, lines)     one transaction                   │
//! │  ├── list(&self, filter)             headers + lines, one snapshot     │
//! │  └── get_by_id(&self, id)                                              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CoffeeRepository`](coffee::CoffeeRepository) - Menu reads and inserts
//! - [`OrderRepository`](order::OrderRepository) - Orders and their lines

pub mod coffee;
pub mod order;
