//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A three-day rental at Rs.3333.33/day:                                  │
//! │    3333.33 × 3 = 9999.989999...  → which paisa did we lose?            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    333333 paise × 3 = 999999 paise, exactly                             │
//! │    Every amount in the system is an exact count of paise                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiraya_core::money::Money;
//!
//! // Create from paise (preferred)
//! let rate = Money::from_paise(300_000); // Rs.3000.00
//!
//! // Arithmetic operations
//! let three_days = rate * 3;                      // Rs.9000.00
//! let with_fee = rate + Money::from_paise(5_000); // Rs.3050.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::{Discount, TaxRate};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate discount math may dip below zero before
///   the clamp in [`Money::apply_discount`]
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for summaries and fleet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::money::Money;
    ///
    /// let rate = Money::from_paise(300_000); // Rs.3000.00
    /// assert_eq!(rate.paise(), 300_000);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(3000).paise(), 300_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the tax amount on this value.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::money::Money;
    /// use kiraya_core::types::TaxRate;
    ///
    /// let base = Money::from_paise(810_000);   // Rs.8100.00
    /// let rate = TaxRate::from_bps(1800);      // 18%
    ///
    /// // Rs.8100.00 × 18% = Rs.1458.00
    /// assert_eq!(base.calculate_tax(rate).paise(), 145_800);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(tax_paise as i64)
    }

    /// Applies a percentage discount and returns the remaining amount,
    /// clamped at zero.
    ///
    /// ## Clamping
    /// A discount above 100% would otherwise produce a negative amount.
    /// Rather than rejecting it, the remaining amount floors at zero and
    /// downstream tax applies to zero. Callers never see a negative price.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::money::Money;
    /// use kiraya_core::types::Discount;
    ///
    /// let base = Money::from_paise(900_000); // Rs.9000.00
    /// let after = base.apply_discount(Discount::from_bps(1000)); // 10% off
    /// assert_eq!(after.paise(), 810_000); // Rs.8100.00
    ///
    /// let free = base.apply_discount(Discount::from_bps(15_000)); // 150% off
    /// assert!(free.is_zero());
    /// ```
    pub fn apply_discount(&self, discount: Discount) -> Money {
        let discount_amount = (self.0 as i128 * discount.bps() as i128 + 5000) / 10000;
        let remaining = self.0 - discount_amount as i64;
        if remaining < 0 {
            Money::zero()
        } else {
            Money::from_paise(remaining)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Matches the desk's terminal output: `Rs.3000.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs.{}.{:02}", sign, self.rupees().abs(), self.paise_part())
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

/// Multiplication by i64 (for day-count calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(300_099);
        assert_eq!(money.paise(), 300_099);
        assert_eq!(money.rupees(), 3000);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(3000).paise(), 300_000);
        assert_eq!(Money::from_rupees(0).paise(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(300_000)), "Rs.3000.00");
        assert_eq!(format!("{}", Money::from_paise(955_800)), "Rs.9558.00");
        assert_eq!(format!("{}", Money::from_paise(1_05)), "Rs.1.05");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-Rs.5.50");
        assert_eq!(format!("{}", Money::zero()), "Rs.0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.paise(), 1500);
        c -= b;
        assert_eq!(c.paise(), 1000);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // Rs.8100.00 at 18% = Rs.1458.00, exactly
        let amount = Money::from_paise(810_000);
        let rate = TaxRate::from_bps(1800);
        assert_eq!(amount.calculate_tax(rate).paise(), 145_800);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // Rs.10.00 at 8.25% = Rs.0.825 → Rs.0.83 (half-up)
        let amount = Money::from_paise(1000);
        let rate = TaxRate::from_bps(825);
        assert_eq!(amount.calculate_tax(rate).paise(), 83);
    }

    #[test]
    fn test_tax_on_zero_base_is_zero() {
        let rate = TaxRate::from_bps(1800);
        assert!(Money::zero().calculate_tax(rate).is_zero());
    }

    #[test]
    fn test_apply_discount() {
        let base = Money::from_paise(900_000); // Rs.9000.00
        let after = base.apply_discount(Discount::from_bps(1000)); // 10%
        assert_eq!(after.paise(), 810_000);
    }

    #[test]
    fn test_discount_at_exactly_100_percent() {
        let base = Money::from_paise(900_000);
        assert!(base.apply_discount(Discount::from_bps(10_000)).is_zero());
    }

    #[test]
    fn test_discount_above_100_percent_clamps_to_zero() {
        let base = Money::from_paise(900_000);
        let after = base.apply_discount(Discount::from_bps(15_000)); // 150%
        assert!(after.is_zero());
        assert!(!after.is_negative());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_paise(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
