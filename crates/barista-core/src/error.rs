//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barista-core errors (this file)                                       │
//! │  ├── CoreError        - Service-level failures                         │
//! │  │   ├── UnknownCoffee  (reference error, caller-facing)               │
//! │  │   ├── Validation     (malformed input, caller-facing)               │
//! │  │   ├── MissingCoffee  (stored line without its coffee)               │
//! │  │   └── Storage        (infrastructure, fatal)                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  barista-db errors (separate crate)                                    │
//! │  └── DbError          - Database failures, folded into Storage         │
//! │                                                                         │
//! │  barista-api errors (in app)                                           │
//! │  └── ApiError         - HTTP status + {"detail": ...}                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the Order Service and Consumption Analyzer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order line references a coffee id that is not on the menu.
    ///
    /// The whole order is rejected; nothing is persisted.
    #[error("Coffee with id {0} not found")]
    UnknownCoffee(i64),

    /// A stored order line points at a coffee the catalog no longer returns.
    ///
    /// Foreign keys make this unreachable on a healthy database, so it is
    /// treated as an infrastructure failure rather than a caller error.
    #[error("Order line {line_id} references missing coffee {coffee_id}")]
    MissingCoffee { line_id: i64, coffee_id: i64 },

    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage layer failed (connection, query, transaction).
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Whether the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::UnknownCoffee(_) | CoreError::Validation(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A derived amount no longer fits in 64 bits.
    #[error("{field} is too large")]
    TooLarge { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
