//! # Food
//!
//! A food type with accumulated toppings.
//!
//! ```rust
//! use stand_core::item::{Food, Orderable};
//!
//! let mut hotdog = Food::new("Hotdog").unwrap();
//! hotdog.add_topping("bacon_bits").unwrap();
//! hotdog.add_topping("CHILI").unwrap();
//! assert_eq!(hotdog.total_price().cents(), 320);
//! ```

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{CatalogEntry, FoodTopping, FoodType, Priced};
use crate::error::{CoreError, CoreResult};
use crate::item::{Orderable, ToppingSet};
use crate::money::Money;
use crate::receipt::ReceiptLine;
use crate::types::ItemKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    food_type: FoodType,
    toppings: ToppingSet<FoodTopping>,
}

impl Food {
    /// Creates a food item. String types are matched case-insensitively.
    pub fn new<T>(food_type: T) -> CoreResult<Self>
    where
        T: TryInto<FoodType>,
        CoreError: From<T::Error>,
    {
        let food_type: FoodType = food_type.try_into()?;

        Ok(Food {
            food_type,
            toppings: ToppingSet::new(),
        })
    }

    /// Adds a topping. Duplicates are a no-op.
    pub fn add_topping<T>(&mut self, topping: T) -> CoreResult<()>
    where
        T: TryInto<FoodTopping>,
        CoreError: From<T::Error>,
    {
        let topping: FoodTopping = topping.try_into()?;

        if self.toppings.insert(topping) {
            debug!(food = %self.food_type, topping = %topping, "Added food topping");
        }

        Ok(())
    }

    #[inline]
    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    /// Price of the food type before toppings.
    pub fn base_price(&self) -> Money {
        self.food_type.price()
    }

    pub fn toppings(&self) -> &BTreeSet<FoodTopping> {
        self.toppings.as_set()
    }

    pub fn num_toppings(&self) -> usize {
        self.toppings.len()
    }
}

impl Orderable for Food {
    fn kind(&self) -> ItemKind {
        ItemKind::Food
    }

    fn total_price(&self) -> Money {
        self.base_price() + self.toppings.total()
    }

    fn receipt_line(&self) -> ReceiptLine {
        ReceiptLine::Food {
            type_or_flavor: self.food_type.key().to_string(),
            toppings: self.toppings.keys(),
            price: self.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_food_creation() {
        let food = Food::new("hotdog").unwrap();
        assert_eq!(food.food_type(), FoodType::Hotdog);
        assert_eq!(food.food_type().to_string(), "hotdog");
        assert_eq!(food.base_price().cents(), 230);
        assert_eq!(food.total_price().cents(), 230);
    }

    #[test]
    fn test_food_type_is_normalized() {
        let food = Food::new("  Onion Rings ").unwrap();
        assert_eq!(food.food_type(), FoodType::OnionRings);
        assert_eq!(food.food_type().key(), "onion_rings");
    }

    #[test]
    fn test_invalid_food_creation() {
        let err = Food::new("invalid_food").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOption { category: Category::FoodType, .. }
        ));
    }

    #[test]
    fn test_total_price_with_toppings() {
        let mut food = Food::new(FoodType::Hotdog).unwrap();
        food.add_topping("bacon_bits").unwrap();
        food.add_topping("chili").unwrap();
        assert_eq!(food.total_price().cents(), 320);
    }

    #[test]
    fn test_duplicate_topping_is_noop() {
        let mut food = Food::new("corndog").unwrap();
        food.add_topping("Cherry").unwrap();
        food.add_topping("cherry").unwrap();
        food.add_topping(FoodTopping::Cherry).unwrap();
        assert_eq!(food.num_toppings(), 1);
        assert_eq!(food.total_price().cents(), 200);
    }

    #[test]
    fn test_invalid_topping_leaves_food_unchanged() {
        let mut food = Food::new("nacho_chips").unwrap();
        food.add_topping("nacho_cheese").unwrap();
        let before = food.clone();

        let err = food.add_topping("cookie_dough").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOption { category: Category::FoodTopping, .. }
        ));
        assert_eq!(food, before);
    }

    #[test]
    fn test_receipt_line() {
        let mut food = Food::new("french fries").unwrap();
        food.add_topping("ketchup").unwrap();
        food.add_topping("chili").unwrap();

        match food.receipt_line() {
            ReceiptLine::Food { type_or_flavor, toppings, price } => {
                assert_eq!(type_or_flavor, "french_fries");
                assert_eq!(toppings, vec!["chili", "ketchup"]);
                assert_eq!(price.cents(), 210);
            }
            other => panic!("unexpected line: {other:?}"),
        }
    }
}
