//! # Error Types
//!
//! Domain-specific error types for stand-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Input errors (raised where the value enters)                          │
//! │  ├── InvalidOption         - identifier not in the catalog category    │
//! │  ├── InvalidItemType       - ticket kind is not drink/food/dessert     │
//! │  └── MalformedTicket       - ticket body does not deserialize          │
//! │                                                                         │
//! │  Usage errors                                                          │
//! │  ├── UnsupportedOperation  - e.g. a second flavor on a dessert         │
//! │  ├── IndexOutOfRange       - bad removal index                         │
//! │  └── OrderTooLarge         - configured item cap reached               │
//! │                                                                         │
//! │  Configuration errors                                                  │
//! │  ├── InvalidConfig                                                     │
//! │  └── ConfigLoadFailed                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation Policy
//! Every error is local and non-retryable. The entity that rejected the call
//! is left exactly as it was before the call.

use std::convert::Infallible;

use thiserror::Error;

use crate::catalog::Category;

// =============================================================================
// Core Error
// =============================================================================

/// Errors produced by catalog lookups, items and orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Identifier is not a member of the catalog category.
    ///
    /// ## When This Occurs
    /// - `Food::new("pizza")`
    /// - `drink.add_flavor("grape")`
    /// - Any string that fails to parse into a catalog enum
    #[error("Invalid {category}: '{value}'. Valid options: {}", .allowed.join(", "))]
    InvalidOption {
        category: Category,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Structurally disallowed action.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Something other than a drink, food or dessert was offered to an order.
    #[error("Invalid item type: '{0}'. Orders accept drink, food or dessert")]
    InvalidItemType(String),

    /// Removal index outside `[0, len)`.
    #[error("Index {index} out of range for order with {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Order has reached its configured item cap.
    #[error("Order cannot have more than {max} items")]
    OrderTooLarge { max: usize },

    /// Ticket body could not be read.
    #[error("Malformed {kind} ticket: {reason}")]
    MalformedTicket { kind: String, reason: String },

    /// Configuration values fail validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl CoreError {
    /// Builds an `InvalidOption` listing every key of the category.
    pub fn invalid_option(category: Category, value: impl Into<String>) -> Self {
        CoreError::InvalidOption {
            category,
            value: value.into(),
            allowed: category.keys(),
        }
    }
}

/// Typed catalog arguments convert through `TryInto` with `Infallible`.
impl From<Infallible> for CoreError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
