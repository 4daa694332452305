//! # Receipt
//!
//! Structured projection of an order. Hosts render it as text, JSON or UI
//! state; `Display` gives the plain-text register slip.
//!
//! ## JSON Shape
//! ```text
//! {
//!   "order_id": "…",
//!   "item_count": 2,
//!   "subtotal": 4.55,
//!   "tax": 0.329875,
//!   "grand_total": 4.879875,
//!   "items": [
//!     { "kind": "drink", "base": "water", "size": "small",
//!       "flavors": ["lemon"], "price": 1.65 },
//!     { "kind": "food", "type_or_flavor": "hotdog",
//!       "toppings": ["chili"], "price": 2.9 }
//!   ]
//! }
//! ```
//!
//! Money fields serialize as decimal dollars via [`crate::money::decimal`].
//! Tax and grand total are exact; the text slip rounds them half-up to the
//! cent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{decimal, format_dollars, Money};
use crate::types::ItemKind;

// =============================================================================
// Receipt Line
// =============================================================================

/// One item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReceiptLine {
    Drink {
        base: String,
        size: String,
        flavors: Vec<String>,
        #[serde(with = "decimal")]
        #[ts(type = "number")]
        price: Money,
    },
    Food {
        type_or_flavor: String,
        toppings: Vec<String>,
        #[serde(with = "decimal")]
        #[ts(type = "number")]
        price: Money,
    },
    Dessert {
        type_or_flavor: String,
        toppings: Vec<String>,
        #[serde(with = "decimal")]
        #[ts(type = "number")]
        price: Money,
    },
}

impl ReceiptLine {
    pub fn kind(&self) -> ItemKind {
        match self {
            ReceiptLine::Drink { .. } => ItemKind::Drink,
            ReceiptLine::Food { .. } => ItemKind::Food,
            ReceiptLine::Dessert { .. } => ItemKind::Dessert,
        }
    }

    pub fn price(&self) -> Money {
        match self {
            ReceiptLine::Drink { price, .. }
            | ReceiptLine::Food { price, .. }
            | ReceiptLine::Dessert { price, .. } => *price,
        }
    }

    /// One-line description without the price.
    pub fn describe(&self) -> String {
        match self {
            ReceiptLine::Drink { base, size, flavors, .. } => {
                format!("{} {} [{}]", size, base, flavors.join(", "))
            }
            ReceiptLine::Food { type_or_flavor, toppings, .. }
            | ReceiptLine::Dessert { type_or_flavor, toppings, .. } => {
                format!("{} [{}]", type_or_flavor, toppings.join(", "))
            }
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Totals and per-item lines for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    pub order_id: String,

    /// Store name for the slip header, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub store_name: Option<String>,

    pub item_count: usize,

    #[serde(with = "decimal")]
    #[ts(type = "number")]
    pub subtotal: Money,

    /// Exact, `subtotal × rate`.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub tax: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub grand_total: Decimal,

    pub items: Vec<ReceiptLine>,
}

impl Receipt {
    /// Serializes to pretty JSON for hosts that hand receipts to a web UI.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text register slip.
///
/// ```text
/// Stand POS
/// Your order receipt:
/// 1: drink - small water [lemon]  $1.65
/// 2: food - hotdog [chili]  $2.90
/// Subtotal: $4.55
/// Tax: $0.33
/// Total: $4.88
/// ```
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(store) = &self.store_name {
            writeln!(f, "{}", store)?;
        }
        writeln!(f, "Your order receipt:")?;
        for (i, line) in self.items.iter().enumerate() {
            writeln!(f, "{}: {} - {}  {}", i + 1, line.kind(), line.describe(), line.price())?;
        }
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        writeln!(f, "Tax: {}", format_dollars(self.tax))?;
        write!(f, "Total: {}", format_dollars(self.grand_total))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
