//! # Frozen Dessert
//!
//! Exactly one flavor for its whole lifetime, plus toppings.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{CatalogEntry, DessertFlavor, DessertTopping, Priced};
use crate::error::{CoreError, CoreResult};
use crate::item::{Orderable, ToppingSet};
use crate::money::Money;
use crate::receipt::ReceiptLine;
use crate::types::ItemKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenDessert {
    flavor: DessertFlavor,
    toppings: ToppingSet<DessertTopping>,
}

impl FrozenDessert {
    /// Creates a dessert. The flavor is a catalog member, so this cannot fail;
    /// parse string input with `"vanilla_bean".parse::<DessertFlavor>()` first.
    pub fn new(flavor: DessertFlavor) -> Self {
        FrozenDessert {
            flavor,
            toppings: ToppingSet::new(),
        }
    }

    /// Always fails: a dessert carries exactly one flavor.
    ///
    /// ```rust
    /// use stand_core::catalog::DessertFlavor;
    /// use stand_core::item::FrozenDessert;
    /// use stand_core::CoreError;
    ///
    /// let mut dessert = FrozenDessert::new(DessertFlavor::Chocolate);
    /// let err = dessert.add_flavor(DessertFlavor::Banana).unwrap_err();
    /// assert!(matches!(err, CoreError::UnsupportedOperation(_)));
    /// ```
    pub fn add_flavor(&mut self, flavor: DessertFlavor) -> CoreResult<()> {
        Err(CoreError::UnsupportedOperation(format!(
            "frozen dessert already has flavor '{}'; cannot add '{}'",
            self.flavor, flavor
        )))
    }

    /// Adds a topping. Duplicates are a no-op.
    pub fn add_topping<T>(&mut self, topping: T) -> CoreResult<()>
    where
        T: TryInto<DessertTopping>,
        CoreError: From<T::Error>,
    {
        let topping: DessertTopping = topping.try_into()?;

        if self.toppings.insert(topping) {
            debug!(dessert = %self.flavor, topping = %topping, "Added dessert topping");
        }

        Ok(())
    }

    #[inline]
    pub fn flavor(&self) -> DessertFlavor {
        self.flavor
    }

    pub fn base_price(&self) -> Money {
        self.flavor.price()
    }

    pub fn toppings(&self) -> &BTreeSet<DessertTopping> {
        self.toppings.as_set()
    }

    /// Number of toppings (the flavor count is always one).
    pub fn num_toppings(&self) -> usize {
        self.toppings.len()
    }
}

impl Orderable for FrozenDessert {
    fn kind(&self) -> ItemKind {
        ItemKind::Dessert
    }

    fn total_price(&self) -> Money {
        self.base_price() + self.toppings.total()
    }

    fn receipt_line(&self) -> ReceiptLine {
        ReceiptLine::Dessert {
            type_or_flavor: self.flavor.key().to_string(),
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
    fn test_dessert_creation() {
        let dessert = FrozenDessert::new(DessertFlavor::MintChocolateChip);
        assert_eq!(dessert.total_price().cents(), 400);
        assert_eq!(dessert.num_toppings(), 0);
    }

    #[test]
    fn test_second_flavor_is_unsupported() {
        let mut dessert = FrozenDessert::new(DessertFlavor::MintChocolateChip);
        let before = dessert.clone();

        let err = dessert.add_flavor(DessertFlavor::Chocolate).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedOperation(_)));

        // same flavor again is still a second flavor
        assert!(dessert.add_flavor(DessertFlavor::MintChocolateChip).is_err());
        assert_eq!(dessert, before);
    }

    #[test]
    fn test_add_topping_counts_toppings() {
        let mut dessert = FrozenDessert::new(DessertFlavor::Chocolate);
        dessert.add_topping("cherry").unwrap();
        assert_eq!(dessert.num_toppings(), 1);
        assert_eq!(dessert.flavor(), DessertFlavor::Chocolate);
    }

    #[test]
    fn test_total_price_with_toppings() {
        let mut dessert = FrozenDessert::new(DessertFlavor::VanillaBean);
        dessert.add_topping("caramel_sauce").unwrap();
        dessert.add_topping("cookie_dough").unwrap();
        assert_eq!(dessert.total_price().cents(), 300 + 50 + 100);
    }

    #[test]
    fn test_invalid_topping_rejected() {
        let mut dessert = FrozenDessert::new(DessertFlavor::Smore);
        let err = dessert.add_topping("chili").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOption { category: Category::DessertTopping, .. }
        ));
        assert_eq!(dessert.num_toppings(), 0);
    }

    #[test]
    fn test_receipt_line() {
        let mut dessert = FrozenDessert::new(DessertFlavor::ButterPecan);
        dessert.add_topping(DessertTopping::TAndT).unwrap();

        match dessert.receipt_line() {
            ReceiptLine::Dessert { type_or_flavor, toppings, price } => {
                assert_eq!(type_or_flavor, "butter_pecan");
                assert_eq!(toppings, vec!["t_and_t"]);
                assert_eq!(price.cents(), 450);
            }
            other => panic!("unexpected line: {other:?}"),
        }
    }
}
