//! # stand-core: Ordering Logic for a Refreshment Stand
//!
//! Catalog, item pricing and order aggregation with no I/O on the pricing
//! path.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stand POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Host (register UI, kiosk, web API)               │   │
//! │  │     renders receipts, takes payment, persists orders            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed calls / JSON tickets             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stand-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   item    │  │   order   │  │  receipt  │  │   │
//! │  │   │  options  │  │  Drink    │  │  Order    │  │  Receipt  │  │   │
//! │  │   │  prices   │  │  Food     │  │  totals   │  │  lines    │  │   │
//! │  │   │           │  │  Dessert  │  │  tax      │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   money • ticket • session • config • error                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Closed option sets and their prices
//! - [`item`] - Drink, Food, FrozenDessert and the `Orderable` capability
//! - [`order`] - Order aggregate: subtotal, tax, grand total, receipt
//! - [`receipt`] - Structured receipt and its text rendering
//! - [`ticket`] - Untyped (JSON) item requests
//! - [`session`] - Mutex-guarded order handle for multi-threaded hosts
//! - [`config`] - TOML + environment configuration
//! - [`money`] - Integer-cent money type
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Closed Option Sets**: bases, sizes, flavors and toppings are enums
//! 2. **Integer Money**: all prices are whole cents; tax is an exact `Decimal`
//! 3. **Fail Fast, Change Nothing**: a rejected call leaves state untouched
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use stand_core::catalog::{Base, DessertFlavor, Flavor, Size};
//! use stand_core::item::{Drink, Food, FrozenDessert};
//! use stand_core::order::Order;
//!
//! let mut drink = Drink::new(Base::PokeCola, Size::Medium).unwrap();
//! drink.add_flavor(Flavor::Cherry).unwrap();
//!
//! let mut hotdog = Food::new("hotdog").unwrap();
//! hotdog.add_topping("chili").unwrap();
//!
//! let mut order = Order::new();
//! order.add_item(drink).unwrap();
//! order.add_item(hotdog).unwrap();
//! order.add_item(FrozenDessert::new(DessertFlavor::Smore)).unwrap();
//!
//! // $1.90 + $2.90 + $4.00
//! assert_eq!(order.subtotal().cents(), 880);
//! // $8.80 × 7.25% = $0.638, printed as $0.64
//! assert_eq!(order.tax(), Decimal::new(638, 3));
//! println!("{}", order.receipt());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod receipt;
pub mod session;
pub mod ticket;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::StandConfig;
pub use error::{CoreError, CoreResult};
pub use item::{Drink, Food, FrozenDessert, Item, Orderable};
pub use money::Money;
pub use rust_decimal::Decimal;
pub use order::Order;
pub use receipt::{Receipt, ReceiptLine};
pub use session::OrderSession;
pub use ticket::ItemTicket;
pub use types::{ItemKind, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order unless configured otherwise (7.25%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 725;
