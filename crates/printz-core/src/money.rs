//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The legacy frontend priced jobs in JS floats:                          │
//! │    3 files × 2 copies × $0.10 = 0.6000000000000001  ❌ WRONG!           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 2 × 10 cents = 60 cents, exactly                                 │
//! │                                                                         │
//! │  Every per-page rate is a whole number of cents, so quoting never      │
//! │  needs fractions - only the duplex discount divides, and it divides    │
//! │  amounts that are always multiples of 5 cents.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printz_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(10); // $0.10 per page
//!
//! // Arithmetic operations
//! let six_pages = rate * 6;                     // $0.60
//! let total = six_pages + Money::from_cents(5); // $0.65
//!
//! // NEVER do this:
//! // let bad = Money::from_float(0.10); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PaperSize.rate_cents ──► pricing::quote ──► PrintJob.total_cost        │
/// │                                                    │                     │
/// │                                                    ▼                     │
/// │                              Transaction.amount (ledger record)          │
/// │                                                                          │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use printz_core::money::Money;
    ///
    /// let cost = Money::from_cents(160); // Represents $1.60
    /// assert_eq!(cost.cents(), 160);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The stores, calculations, and API all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use printz_core::money::Money;
    ///
    /// let cost = Money::from_cents(160);
    /// assert_eq!(cost.dollars(), 1);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use printz_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (2000 = 20%)
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// For the duplex discount every gross amount is a multiple of 5 cents,
    /// so the result is exact.
    ///
    /// ## Example
    /// ```rust
    /// use printz_core::money::Money;
    ///
    /// let gross = Money::from_cents(200);                 // $2.00
    /// let discounted = gross.apply_percentage_discount(2000); // 20% off
    /// assert_eq!(discounted.cents(), 160);                // $1.60
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // i128 intermediate prevents overflow on large amounts
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle localization properly.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for file and copy counts).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Sum of an iterator of Money values (for revenue totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(160);
        assert_eq!(money.cents(), 160);
        assert_eq!(money.dollars(), 1);
        assert_eq!(money.cents_part(), 60);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(160)), "$1.60");
        assert_eq!(format!("{}", Money::from_cents(60)), "$0.60");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(100);
        let b = Money::from_cents(50);

        assert_eq!((a + b).cents(), 150);
        assert_eq!((a - b).cents(), 50);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 300);
    }

    #[test]
    fn test_percentage_discount_exact_on_multiples_of_five() {
        // $2.00 gross, 20% off => $1.60, no rounding involved
        let gross = Money::from_cents(200);
        let discounted = gross.apply_percentage_discount(2000);
        assert_eq!(discounted.cents(), 160);
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 33 cents at 20% = 6.6 cents discount -> rounds to 7
        let gross = Money::from_cents(33);
        let discounted = gross.apply_percentage_discount(2000);
        assert_eq!(discounted.cents(), 26);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_sum() {
        let total: Money = [60, 160, 0]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 220);
    }
}
