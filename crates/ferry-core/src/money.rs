//! # Money Module
//!
//! Provides the `Money` type for fares and fees.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    116.00 × 0.90 × 0.80 = 83.52000000000001  ❌                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    11600 × 90% = 10440, × 80% = 8352  ✅ exactly ₱83.52                 │
//! │                                                                         │
//! │  Every fare tier is a whole peso amount, so the 10% season and 20%     │
//! │  PWD discounts always land on an exact centavo. No rounding happens.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ferry_core::money::Money;
//!
//! let base = Money::from_whole(116);
//! let fare = base.apply_percentage_discount(1_000); // summer, 10% off
//! assert_eq!(fare.cents(), 10_440);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::DEFAULT_CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (1/100 of a peso).
///
/// ## Two Display Paths
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Shown                                 │
/// │                                                                         │
/// │  Traveler.fare ──┬──► Ticket QR text   "₱83.00"  (format_truncated)    │
/// │                  │                                                      │
/// │                  └──► Admin table      "₱83.52"  (format_amount)       │
/// │                                                                         │
/// │  Both read the same stored value. The ticket drops the centavos.       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use ferry_core::money::Money;
    ///
    /// let fee = Money::from_cents(5_000); // ₱50.00
    /// assert_eq!(fee.cents(), 5_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    #[inline]
    pub const fn from_whole(units: i64) -> Self {
        Money(units * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso part, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use ferry_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(8_352).whole_units(), 83);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// The discount is rounded half up to the centavo. For the fare table
    /// the division is always exact.
    ///
    /// ## Example
    /// ```rust
    /// use ferry_core::money::Money;
    ///
    /// let base = Money::from_whole(160);
    /// assert_eq!(base.apply_percentage_discount(2_000).cents(), 12_800);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // i128 keeps the intermediate product from overflowing
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5_000) / 10_000;
        Money::from_cents(self.0 - discount_amount as i64)
    }

    /// Formats with two decimals, e.g. `₱83.52`. Used by the admin table.
    pub fn format_amount(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.whole_units().abs(),
            self.cents_part()
        )
    }

    /// Formats the whole-peso part followed by `.00`, e.g. `₱83.00`.
    ///
    /// Used on the ticket, which always shows truncated amounts.
    pub fn format_truncated(&self, symbol: &str) -> String {
        format!("{}{}.00", symbol, self.whole_units())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the default currency symbol and two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_amount(DEFAULT_CURRENCY_SYMBOL))
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

/// Summing fares for the dashboard header.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_whole() {
        assert_eq!(Money::from_whole(104).cents(), 10_400);
        assert_eq!(Money::from_whole(0), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(8_352)), "₱83.52");
        assert_eq!(format!("{}", Money::from_cents(500)), "₱5.00");
        assert_eq!(format!("{}", Money::zero()), "₱0.00");
    }

    #[test]
    fn test_format_truncated_drops_centavos() {
        let fare = Money::from_cents(8_352);
        assert_eq!(fare.format_truncated("₱"), "₱83.00");
        assert_eq!(fare.format_amount("₱"), "₱83.52");
    }

    #[test]
    fn test_percentage_discount() {
        let base = Money::from_whole(116);
        let summer = base.apply_percentage_discount(1_000);
        assert_eq!(summer.cents(), 10_440);
        assert_eq!(summer.apply_percentage_discount(2_000).cents(), 8_352);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_whole(154), Money::from_cents(8_352)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 23_752);
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Money::from_whole(10);
        a += Money::from_whole(5);
        assert_eq!(a.cents(), 1_500);
        assert_eq!((a - Money::from_whole(15)).cents(), 0);
    }
}
