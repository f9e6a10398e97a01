//! # Pricing Engine
//!
//! Pure price computation: discount first, then tax on the remainder.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base = rate/day × days                Rs.9000.00                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_discount(10%)                   Rs.8100.00  (clamped at zero)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  + calculate_tax(18%)                  Rs.1458.00                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total                                 Rs.9558.00                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Discount, TaxRate};
use crate::validation::validate_tax_rate_bps;

/// Computes total prices for a fixed tax rate.
///
/// The rate is set once at construction and has no mutator. Any price
/// recomputed later (for example at return time) therefore uses the same
/// rate the rental was previewed with.
///
/// Only constructible through [`PricingService::new`], so an out-of-range
/// rate cannot enter the system.
#[derive(Debug, Clone, Copy)]
pub struct PricingService {
    tax_rate: TaxRate,
}

impl PricingService {
    /// Creates a pricing service with the given tax rate.
    ///
    /// ## Errors
    /// Rejects rates above 100% at construction time. This is the only
    /// failure the pricing engine can produce; `compute_total` itself has
    /// no error conditions.
    pub fn new(tax_rate: TaxRate) -> Result<Self, ValidationError> {
        validate_tax_rate_bps(tax_rate.bps())?;
        Ok(PricingService { tax_rate })
    }

    /// Returns the configured tax rate (read-only, for display).
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Computes the total price: discount applied to the base, tax added
    /// to what remains.
    ///
    /// Pure and deterministic. A discount above 100% clamps the
    /// discounted base to zero, so the result is never negative.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::money::Money;
    /// use kiraya_core::pricing::PricingService;
    /// use kiraya_core::types::{Discount, TaxRate};
    ///
    /// let pricing = PricingService::new(TaxRate::from_bps(1800)).unwrap();
    /// let total = pricing.compute_total(
    ///     Money::from_paise(900_000),   // Rs.9000.00
    ///     Discount::from_bps(1000),     // 10% off
    /// );
    /// assert_eq!(total.paise(), 955_800); // Rs.9558.00
    /// ```
    pub fn compute_total(&self, base: Money, discount: Discount) -> Money {
        let after_discount = base.apply_discount(discount);
        after_discount + after_discount.calculate_tax(self.tax_rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
