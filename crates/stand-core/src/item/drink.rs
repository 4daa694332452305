//! # Drink
//!
//! A base and a size, plus any number of distinct flavors.
//!
//! ## Pricing
//! ```text
//! cost = size price + $0.15 × |flavors|
//!
//! Small ($1.50) + lemon + lemon + mint
//!   add_flavor(lemon)  → $1.65
//!   add_flavor(lemon)  → $1.65  (already present, no charge)
//!   add_flavor(mint)   → $1.80
//! ```
//!
//! `cost` is kept incrementally by `add_flavor` and recomputed from scratch by
//! `set_flavors`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{Base, CatalogEntry, Flavor, Priced, Size, FLAVOR_PRICE};
use crate::error::{CoreError, CoreResult};
use crate::item::Orderable;
use crate::money::Money;
use crate::receipt::ReceiptLine;
use crate::types::ItemKind;

/// A composed drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    base: Base,
    size: Size,
    flavors: BTreeSet<Flavor>,
    cost: Money,
}

impl Drink {
    /// Creates a drink with no flavors.
    ///
    /// Accepts catalog enums or string identifiers.
    ///
    /// ```rust
    /// use stand_core::catalog::{Base, Size};
    /// use stand_core::item::{Drink, Orderable};
    ///
    /// let drink = Drink::new(Base::Water, Size::Small).unwrap();
    /// assert_eq!(drink.total_price().cents(), 150);
    ///
    /// assert!(Drink::new("water", "gigantic").is_err());
    /// ```
    pub fn new<B, S>(base: B, size: S) -> CoreResult<Self>
    where
        B: TryInto<Base>,
        S: TryInto<Size>,
        CoreError: From<B::Error> + From<S::Error>,
    {
        let base: Base = base.try_into()?;
        let size: Size = size.try_into()?;

        Ok(Drink {
            base,
            size,
            flavors: BTreeSet::new(),
            cost: size.price(),
        })
    }

    /// Adds one flavor. Re-adding a present flavor is a no-op.
    pub fn add_flavor<F>(&mut self, flavor: F) -> CoreResult<()>
    where
        F: TryInto<Flavor>,
        CoreError: From<F::Error>,
    {
        let flavor: Flavor = flavor.try_into()?;

        if self.flavors.insert(flavor) {
            self.cost += flavor.price();
            debug!(flavor = %flavor, cost = %self.cost, "Added drink flavor");
        } else {
            debug!(flavor = %flavor, "Flavor already on drink");
        }

        Ok(())
    }

    /// Replaces the whole flavor set.
    ///
    /// Every flavor is validated before anything changes; one bad identifier
    /// leaves the drink untouched. Duplicates in the input collapse.
    ///
    /// ```rust
    /// use stand_core::item::{Drink, Orderable};
    ///
    /// let mut drink = Drink::new("water", "small").unwrap();
    /// drink.set_flavors(["lemon", "mint", "lemon"]).unwrap();
    /// assert_eq!(drink.num_flavors(), 2);
    /// assert_eq!(drink.total_price().cents(), 180);
    ///
    /// assert!(drink.set_flavors(["cherry", "grape"]).is_err());
    /// assert_eq!(drink.num_flavors(), 2);
    /// ```
    pub fn set_flavors<I, F>(&mut self, flavors: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = F>,
        F: TryInto<Flavor>,
        CoreError: From<F::Error>,
    {
        let flavors = flavors
            .into_iter()
            .map(|flavor| -> CoreResult<Flavor> { Ok(flavor.try_into()?) })
            .collect::<CoreResult<BTreeSet<Flavor>>>()?;

        self.cost = self.size.price() + FLAVOR_PRICE * flavors.len() as i64;
        self.flavors = flavors;

        debug!(count = self.flavors.len(), cost = %self.cost, "Replaced drink flavors");
        Ok(())
    }

    #[inline]
    pub fn base(&self) -> Base {
        self.base
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Flavors in catalog order.
    pub fn flavors(&self) -> &BTreeSet<Flavor> {
        &self.flavors
    }

    pub fn num_flavors(&self) -> usize {
        self.flavors.len()
    }

    pub fn has_flavor(&self, flavor: Flavor) -> bool {
        self.flavors.contains(&flavor)
    }
}

impl Orderable for Drink {
    fn kind(&self) -> ItemKind {
        ItemKind::Drink
    }

    fn total_price(&self) -> Money {
        self.cost
    }

    fn receipt_line(&self) -> ReceiptLine {
        ReceiptLine::Drink {
            base: self.base.key().to_string(),
            size: self.size.key().to_string(),
            flavors: self.flavors.iter().map(|f| f.key().to_string()).collect(),
            price: self.cost,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
