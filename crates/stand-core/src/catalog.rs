//! # Catalog
//!
//! Static reference data: every orderable option and its price.
//!
//! ## Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Categories                              │
//! │                                                                         │
//! │  Drinks                    Food                    Desserts             │
//! │  ──────                    ────                    ────────             │
//! │  Base      (no price)      FoodType    (base)      DessertFlavor (base) │
//! │  Size      (base price)    FoodTopping (delta)     DessertTopping(delta)│
//! │  Flavor    (+$0.15 each)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every category is a closed enum, so matches over options are checked for
//! exhaustiveness. String input (tickets, UI fields) is normalized once when
//! parsed: trimmed, lowercased, runs of spaces/hyphens/dots become `_`.
//!
//! ```rust
//! use stand_core::catalog::{FoodTopping, Priced};
//!
//! let topping: FoodTopping = " Bacon Bits ".parse().unwrap();
//! assert_eq!(topping, FoodTopping::BaconBits);
//! assert_eq!(topping.price().cents(), 30);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Price of every added drink flavor.
pub const FLAVOR_PRICE: Money = Money::from_cents(15);

// =============================================================================
// Category
// =============================================================================

/// Names a catalog category (used in error messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DrinkBase,
    DrinkSize,
    DrinkFlavor,
    FoodType,
    FoodTopping,
    DessertFlavor,
    DessertTopping,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::DrinkBase => "drink base",
            Category::DrinkSize => "drink size",
            Category::DrinkFlavor => "drink flavor",
            Category::FoodType => "food type",
            Category::FoodTopping => "food topping",
            Category::DessertFlavor => "dessert flavor",
            Category::DessertTopping => "dessert topping",
        }
    }

    /// Every valid key of the category, in catalog order.
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            Category::DrinkBase => keys_of::<Base>(),
            Category::DrinkSize => keys_of::<Size>(),
            Category::DrinkFlavor => keys_of::<Flavor>(),
            Category::FoodType => keys_of::<FoodType>(),
            Category::FoodTopping => keys_of::<FoodTopping>(),
            Category::DessertFlavor => keys_of::<DessertFlavor>(),
            Category::DessertTopping => keys_of::<DessertTopping>(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn keys_of<T: CatalogEntry>() -> Vec<&'static str> {
    T::ALL.iter().map(|entry| entry.key()).collect()
}

// =============================================================================
// Catalog Traits
// =============================================================================

/// A member of a closed catalog category.
pub trait CatalogEntry: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Category this entry belongs to.
    const CATEGORY: Category;

    /// Every member, in catalog order.
    const ALL: &'static [Self];

    /// Canonical snake_case identifier.
    fn key(&self) -> &'static str;

    /// Parses a user-supplied identifier (case-insensitive).
    fn parse(input: &str) -> CoreResult<Self> {
        let key = normalize_key(input);
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.key() == key)
            .ok_or_else(|| CoreError::invalid_option(Self::CATEGORY, input.trim()))
    }
}

/// A catalog entry with a price (base price or delta, depending on category).
pub trait Priced: CatalogEntry {
    fn price(&self) -> Money;
}

/// Normalizes an identifier: `" Mr. Salt "` → `"mr_salt"`.
pub fn normalize_key(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_' || c == '.')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

// =============================================================================
// Enum Generator
// =============================================================================

/// Declares a catalog enum with its keys, parsing and display impls.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $category:path {
            $( $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl CatalogEntry for $name {
            const CATEGORY: Category = $category;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as CatalogEntry>::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = CoreError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl TryFrom<&String> for $name {
            type Error = CoreError;

            fn try_from(s: &String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

// =============================================================================
// Drinks
// =============================================================================

catalog_enum! {
    /// Liquid foundation of a drink. Bases carry no price.
    pub enum Base in Category::DrinkBase {
        Water => "water",
        Sprite => "sprite",
        PokeCola => "pokecola",
        MrSalt => "mr_salt",
        HillFog => "hill_fog",
        LeafWine => "leaf_wine",
    }
}

catalog_enum! {
    /// Cup size; sets the drink's base price.
    pub enum Size in Category::DrinkSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        Mega => "mega",
    }
}

impl Priced for Size {
    fn price(&self) -> Money {
        match self {
            Size::Small => Money::from_cents(150),
            Size::Medium => Money::from_cents(175),
            Size::Large => Money::from_cents(205),
            Size::Mega => Money::from_cents(215),
        }
    }
}

catalog_enum! {
    /// Drink mix-in.
    pub enum Flavor in Category::DrinkFlavor {
        Lemon => "lemon",
        Cherry => "cherry",
        Strawberry => "strawberry",
        Mint => "mint",
        Blueberry => "blueberry",
        Lime => "lime",
    }
}

impl Priced for Flavor {
    fn price(&self) -> Money {
        FLAVOR_PRICE
    }
}

// =============================================================================
// Food
// =============================================================================

catalog_enum! {
    pub enum FoodType in Category::FoodType {
        Hotdog => "hotdog",
        Corndog => "corndog",
        IceCream => "ice_cream",
        OnionRings => "onion_rings",
        FrenchFries => "french_fries",
        TaterTots => "tater_tots",
        NachoChips => "nacho_chips",
    }
}

impl Priced for FoodType {
    fn price(&self) -> Money {
        match self {
            FoodType::Hotdog => Money::from_cents(230),
            FoodType::Corndog => Money::from_cents(200),
            FoodType::IceCream => Money::from_cents(300),
            FoodType::OnionRings => Money::from_cents(175),
            FoodType::FrenchFries => Money::from_cents(150),
            FoodType::TaterTots => Money::from_cents(170),
            FoodType::NachoChips => Money::from_cents(190),
        }
    }
}

catalog_enum! {
    pub enum FoodTopping in Category::FoodTopping {
        Cherry => "cherry",
        WhippedCream => "whipped_cream",
        CaramelSauce => "caramel_sauce",
        ChocolateSauce => "chocolate_sauce",
        NachoCheese => "nacho_cheese",
        Chili => "chili",
        BaconBits => "bacon_bits",
        Ketchup => "ketchup",
        Mustard => "mustard",
    }
}

impl Priced for FoodTopping {
    fn price(&self) -> Money {
        match self {
            FoodTopping::Cherry
            | FoodTopping::WhippedCream
            | FoodTopping::Ketchup
            | FoodTopping::Mustard => Money::zero(),
            FoodTopping::CaramelSauce | FoodTopping::ChocolateSauce => Money::from_cents(50),
            FoodTopping::NachoCheese | FoodTopping::BaconBits => Money::from_cents(30),
            FoodTopping::Chili => Money::from_cents(60),
        }
    }
}

// =============================================================================
// Frozen Desserts
// =============================================================================

catalog_enum! {
    /// The single flavor of a frozen dessert; sets its base price.
    pub enum DessertFlavor in Category::DessertFlavor {
        MintChocolateChip => "mint_chocolate_chip",
        Chocolate => "chocolate",
        VanillaBean => "vanilla_bean",
        Banana => "banana",
        ButterPecan => "butter_pecan",
        Smore => "smore",
    }
}

impl Priced for DessertFlavor {
    fn price(&self) -> Money {
        match self {
            DessertFlavor::MintChocolateChip | DessertFlavor::Smore => Money::from_cents(400),
            DessertFlavor::Chocolate | DessertFlavor::VanillaBean => Money::from_cents(300),
            DessertFlavor::Banana | DessertFlavor::ButterPecan => Money::from_cents(350),
        }
    }
}

catalog_enum! {
    pub enum DessertTopping in Category::DessertTopping {
        Cherry => "cherry",
        WhippedCream => "whipped_cream",
        CaramelSauce => "caramel_sauce",
        ChocolateSauce => "chocolate_sauce",
        Storios => "storios",
        DigDogs => "dig_dogs",
        TAndT => "t_and_t",
        CookieDough => "cookie_dough",
    }
}

impl Priced for DessertTopping {
    fn price(&self) -> Money {
        match self {
            DessertTopping::Cherry | DessertTopping::WhippedCream => Money::zero(),
            DessertTopping::CaramelSauce | DessertTopping::ChocolateSauce => Money::from_cents(50),
            DessertTopping::Storios
            | DessertTopping::DigDogs
            | DessertTopping::TAndT
            | DessertTopping::CookieDough => Money::from_cents(100),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
