//! # Items
//!
//! The three orderable kinds and the capability they share.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Item                                       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Drink       │   │      Food       │   │  FrozenDessert  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  base           │   │  food_type      │   │  flavor (fixed) │       │
//! │  │  size (fixed)   │   │  toppings       │   │  toppings       │       │
//! │  │  flavors        │   │                 │   │                 │       │
//! │  │  cost (running) │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  All three implement `Orderable` (kind, total_price, receipt_line).    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod dessert;
pub mod drink;
pub mod food;

use std::collections::BTreeSet;

use crate::catalog::Priced;
use crate::money::Money;
use crate::receipt::ReceiptLine;
use crate::types::ItemKind;

pub use dessert::FrozenDessert;
pub use drink::Drink;
pub use food::Food;

// =============================================================================
// Orderable
// =============================================================================

/// Capability shared by everything an order can hold.
pub trait Orderable {
    fn kind(&self) -> ItemKind;

    /// Current price of the item, in whole cents.
    fn total_price(&self) -> Money;

    /// Per-item projection used by receipts.
    fn receipt_line(&self) -> ReceiptLine;
}

// =============================================================================
// Item
// =============================================================================

/// Any orderable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Drink(Drink),
    Food(Food),
    Dessert(FrozenDessert),
}

impl Item {
    pub fn as_drink(&self) -> Option<&Drink> {
        match self {
            Item::Drink(drink) => Some(drink),
            _ => None,
        }
    }

    pub fn as_food(&self) -> Option<&Food> {
        match self {
            Item::Food(food) => Some(food),
            _ => None,
        }
    }

    pub fn as_dessert(&self) -> Option<&FrozenDessert> {
        match self {
            Item::Dessert(dessert) => Some(dessert),
            _ => None,
        }
    }
}

impl Orderable for Item {
    fn kind(&self) -> ItemKind {
        match self {
            Item::Drink(drink) => drink.kind(),
            Item::Food(food) => food.kind(),
            Item::Dessert(dessert) => dessert.kind(),
        }
    }

    fn total_price(&self) -> Money {
        match self {
            Item::Drink(drink) => drink.total_price(),
            Item::Food(food) => food.total_price(),
            Item::Dessert(dessert) => dessert.total_price(),
        }
    }

    fn receipt_line(&self) -> ReceiptLine {
        match self {
            Item::Drink(drink) => drink.receipt_line(),
            Item::Food(food) => food.receipt_line(),
            Item::Dessert(dessert) => dessert.receipt_line(),
        }
    }
}

impl From<Drink> for Item {
    fn from(drink: Drink) -> Self {
        Item::Drink(drink)
    }
}

impl From<Food> for Item {
    fn from(food: Food) -> Self {
        Item::Food(food)
    }
}

impl From<FrozenDessert> for Item {
    fn from(dessert: FrozenDessert) -> Self {
        Item::Dessert(dessert)
    }
}

// =============================================================================
// Topping Set
// =============================================================================

/// Set of priced add-ons; duplicates collapse.
///
/// Shared by `Food` and `FrozenDessert`, which differ only in the catalog
/// category of their toppings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToppingSet<T: Priced> {
    toppings: BTreeSet<T>,
}

impl<T: Priced> ToppingSet<T> {
    pub(crate) fn new() -> Self {
        ToppingSet {
            toppings: BTreeSet::new(),
        }
    }

    /// Returns `false` when the topping was already present.
    pub(crate) fn insert(&mut self, topping: T) -> bool {
        self.toppings.insert(topping)
    }

    pub(crate) fn len(&self) -> usize {
        self.toppings.len()
    }

    pub(crate) fn as_set(&self) -> &BTreeSet<T> {
        &self.toppings
    }

    pub(crate) fn total(&self) -> Money {
        self.toppings.iter().map(Priced::price).sum()
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.toppings.iter().map(|t| t.key().to_string()).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Base, DessertFlavor, FoodTopping, Size};

    #[test]
    fn test_topping_set_collapses_duplicates() {
        let mut set = ToppingSet::new();
        assert!(set.insert(FoodTopping::Chili));
        assert!(!set.insert(FoodTopping::Chili));
        assert!(set.insert(FoodTopping::Ketchup));

        assert_eq!(set.len(), 2);
        assert_eq!(set.total().cents(), 60);
        assert_eq!(set.keys(), vec!["chili", "ketchup"]);
    }

    #[test]
    fn test_item_dispatches_to_variant() {
        let drink: Item = Drink::new(Base::Water, Size::Medium).unwrap().into();
        let food: Item = Food::new("corndog").unwrap().into();
        let dessert: Item = FrozenDessert::new(DessertFlavor::Banana).into();

        assert_eq!(drink.kind(), ItemKind::Drink);
        assert_eq!(drink.total_price().cents(), 175);
        assert_eq!(food.kind(), ItemKind::Food);
        assert_eq!(food.total_price().cents(), 200);
        assert_eq!(dessert.kind(), ItemKind::Dessert);
        assert_eq!(dessert.total_price().cents(), 350);

        assert!(drink.as_drink().is_some());
        assert!(drink.as_food().is_none());
        assert!(dessert.as_dessert().is_some());
    }
}
