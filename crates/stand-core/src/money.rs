//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Small drink + three flavors in floating point:                         │
//! │    1.50 + 0.15 + 0.15 + 0.15 = 1.9500000000000002  ❌                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    150 + 15 + 15 + 15 = 195 cents                                      │
//! │    Every catalog price is whole cents, so item totals are exact        │
//! │    and "rounded to 2 decimals" by construction.                        │
//! │                                                                         │
//! │  Tax is the one sub-cent value: it is an exact `Decimal`               │
//! │    150¢ × 7.25% = 0.10875, rounded only when printed                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stand_core::money::Money;
//!
//! let small = Money::from_cents(150); // $1.50
//! let with_flavor = small + Money::from_cents(15);
//! assert_eq!(with_flavor.to_string(), "$1.65");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed so that differences (e.g. comparing two totals) stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use stand_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(230).cents(), 230);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Dollars as a float, for display and JSON consumers only.
    ///
    /// Never feed this back into arithmetic.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Exact dollar amount (`Decimal::new(cents, 2)`).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Calculates tax at `rate` with no rounding.
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use stand_core::money::Money;
    /// use stand_core::types::TaxRate;
    ///
    /// // $1.50 × 7.25% = $0.10875
    /// let tax = Money::from_cents(150).calculate_tax(TaxRate::from_bps(725));
    /// assert_eq!(tax, Decimal::new(10875, 5));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Decimal {
        self.as_decimal() * rate.as_decimal()
    }
}

/// Rounds an exact amount half-up to the cent. Display only.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use stand_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(Decimal::new(10875, 5)), Decimal::new(11, 2));
/// assert_eq!(round_to_cents(Decimal::new(145, 3)), Decimal::new(15, 2));
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an exact amount as `$0.11`, rounding half-up to the cent.
pub fn format_dollars(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${:.2}", sign, rounded.abs())
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a count (e.g. flavor delta × number of flavors).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Decimal Serde Adapter
// =============================================================================

/// Serializes `Money` as a decimal dollar amount (`1.5` for 150 cents).
///
/// Used by the receipt so hosts see `"subtotal": 1.5` rather than cents.
/// Deserialization rounds to the nearest cent.
pub mod decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Ok(Money::from_cents((dollars * 100.0).round() as i64))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
