//! # Domain Types
//!
//! Core domain types used throughout Kiraya.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │    Customer     │   │     Rental      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  car_id         │   │  customer_id    │   │  car snapshot   │       │
//! │  │  brand, model   │   │  (generated)    │   │  customer snap  │       │
//! │  │  price_per_day  │   │  name           │   │  start/end date │       │
//! │  │  is_available   │   └─────────────────┘   │  discount       │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │    Discount     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  bps (u32)      │                             │
//! │  │  1800 = 18%     │   │  1000 = 10%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Rental` freezes the car and customer data it was created with. The
//! ledger never has to chase a reference back into the fleet to price a
//! return, and a summary can be produced even while the fleet is borrowed
//! elsewhere. Car prices have no mutator, so a snapshot can never go stale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_car_id, validate_customer_name, validate_price_paise};
use crate::CUSTOMER_ID_PREFIX;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the standard rate the desk is seeded with)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Discount
// =============================================================================

/// Discount represented in basis points, same scale as [`TaxRate`].
///
/// No upper bound is enforced: a discount above 100% is priced by clamping
/// the discounted amount at zero, not rejected. See
/// [`Money::apply_discount`](crate::money::Money::apply_discount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount(u32);

impl Discount {
    /// Creates a discount from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Discount(bps)
    }

    /// Creates a discount from a percentage ("10" means 10% off).
    pub fn from_percentage(pct: f64) -> Self {
        Discount((pct * 100.0).round() as u32)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the discount as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        Discount(0)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::zero()
    }
}

// =============================================================================
// Car
// =============================================================================

/// A car in the fleet.
///
/// Created at fleet-seeding time and never deleted. `is_available` is
/// mutated only by the rent/return transitions on
/// [`FleetInventory`](crate::fleet::FleetInventory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Externally assigned identifier ("C001").
    pub car_id: String,

    /// Display-only brand name.
    pub brand: String,

    /// Display-only model name.
    pub model: String,

    /// Daily rate in paise.
    pub price_per_day_paise: i64,

    /// Whether the car can currently be rented.
    pub is_available: bool,
}

impl Car {
    /// Creates a new, available car.
    ///
    /// ## Errors
    /// Rejects an empty or malformed `car_id` and a negative daily rate at
    /// construction time. There is no later point where either could be
    /// caught, so this is the contract surface.
    pub fn new(
        car_id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        price_per_day_paise: i64,
    ) -> Result<Self, ValidationError> {
        let car_id = car_id.into();
        validate_car_id(&car_id)?;
        validate_price_paise(price_per_day_paise)?;

        Ok(Car {
            car_id,
            brand: brand.into(),
            model: model.into(),
            price_per_day_paise,
            is_available: true,
        })
    }

    /// Returns the daily rate as Money.
    #[inline]
    pub fn price_per_day(&self) -> Money {
        Money::from_paise(self.price_per_day_paise)
    }

    /// Calculates the base price for a rental of `days` days (before
    /// discount and tax).
    #[inline]
    pub fn base_price(&self, days: i64) -> Money {
        self.price_per_day() * days
    }
}

/// Fleet-listing format: `C001 - Toyota Camry (Rs.3000.00/day) [Available]`.
impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} ({}/day) {}",
            self.car_id,
            self.brand,
            self.model,
            self.price_per_day(),
            if self.is_available { "[Available]" } else { "[Rented]" }
        )
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// Customers are created when a rental is initiated and stay in the
/// registry for the process lifetime, even after the rental ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Generated identifier (`CUS-` + 8 hex chars).
    pub customer_id: String,

    /// Customer display name (non-empty).
    pub name: String,
}

impl Customer {
    /// Creates a customer with a freshly generated id.
    ///
    /// The id is the first 8 hex characters of a UUID v4 behind the `CUS-`
    /// prefix. The format is cosmetic; collision resistance is what the
    /// ledger relies on.
    ///
    /// ## Errors
    /// Rejects an empty name at construction time.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_customer_name(&name)?;

        let hex = Uuid::new_v4().simple().to_string();
        Ok(Customer {
            customer_id: format!("{}{}", CUSTOMER_ID_PREFIX, &hex[..8]),
            name,
        })
    }
}

// =============================================================================
// Rental Period
// =============================================================================

/// Number of whole days between two dates, floored to 1.
///
/// A same-day or inverted period silently counts as a single day rather
/// than zero or a negative span. Callers that want to warn about it can
/// compare the dates themselves; pricing never sees anything below 1.
#[inline]
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days();
    if days <= 0 {
        1
    } else {
        days
    }
}

// =============================================================================
// Rental
// =============================================================================

/// An active rental: one car out with one customer.
///
/// Owned exclusively by the rental desk's ledger. Created when a rent
/// operation succeeds and destroyed when the return completes; it is never
/// archived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    /// Car identity (ledger key).
    pub car_id: String,

    /// Brand at time of rent (frozen).
    pub brand: String,

    /// Model at time of rent (frozen).
    pub model: String,

    /// Daily rate in paise at time of rent (frozen).
    pub price_per_day_paise: i64,

    /// Customer identity.
    pub customer_id: String,

    /// Customer name at time of rent (frozen).
    pub customer_name: String,

    /// First rental day.
    pub start_date: NaiveDate,

    /// Expected return day.
    pub end_date: NaiveDate,

    /// Agreed discount.
    pub discount: Discount,
}

impl Rental {
    /// Creates a rental, freezing the car and customer data it refers to.
    pub fn new(
        car: &Car,
        customer: &Customer,
        start_date: NaiveDate,
        end_date: NaiveDate,
        discount: Discount,
    ) -> Self {
        Rental {
            car_id: car.car_id.clone(),
            brand: car.brand.clone(),
            model: car.model.clone(),
            price_per_day_paise: car.price_per_day_paise,
            customer_id: customer.customer_id.clone(),
            customer_name: customer.name.clone(),
            start_date,
            end_date,
            discount,
        }
    }

    /// Billable day count, floored to 1.
    #[inline]
    pub fn days(&self) -> i64 {
        rental_days(self.start_date, self.end_date)
    }

    /// Daily rate as Money.
    #[inline]
    pub fn price_per_day(&self) -> Money {
        Money::from_paise(self.price_per_day_paise)
    }

    /// Base price for the whole period (rate × days, before discount/tax).
    #[inline]
    pub fn base_price(&self) -> Money {
        self.price_per_day() * self.days()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tax_rate_conversions() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);

        assert_eq!(TaxRate::from_percentage(18.0).bps(), 1800);
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_discount_conversions() {
        let discount = Discount::from_percentage(10.0);
        assert_eq!(discount.bps(), 1000);
        assert!((discount.percentage() - 10.0).abs() < 0.001);
        assert!(Discount::default().is_zero());
    }

    #[test]
    fn test_car_new_validates() {
        assert!(Car::new("C001", "Toyota", "Camry", 300_000).is_ok());
        assert!(Car::new("", "Toyota", "Camry", 300_000).is_err());
        assert!(Car::new("C001", "Toyota", "Camry", -1).is_err());
    }

    #[test]
    fn test_car_display() {
        let car = Car::new("C001", "Toyota", "Camry", 300_000).unwrap();
        assert_eq!(
            car.to_string(),
            "C001 - Toyota Camry (Rs.3000.00/day) [Available]"
        );

        let mut rented = car;
        rented.is_available = false;
        assert!(rented.to_string().ends_with("[Rented]"));
    }

    #[test]
    fn test_car_base_price() {
        let car = Car::new("C001", "Toyota", "Camry", 300_000).unwrap();
        assert_eq!(car.base_price(3).paise(), 900_000);
        assert_eq!(car.base_price(1), car.price_per_day());
    }

    #[test]
    fn test_customer_id_format() {
        let customer = Customer::new("Ayesha").unwrap();
        assert!(customer.customer_id.starts_with("CUS-"));
        assert_eq!(customer.customer_id.len(), "CUS-".len() + 8);
    }

    #[test]
    fn test_customer_ids_are_unique() {
        let a = Customer::new("Ayesha").unwrap();
        let b = Customer::new("Ayesha").unwrap();
        assert_ne!(a.customer_id, b.customer_id);
    }

    #[test]
    fn test_customer_rejects_empty_name() {
        assert!(Customer::new("").is_err());
        assert!(Customer::new("   ").is_err());
    }

    #[test]
    fn test_rental_days_normal_span() {
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 4)), 3);
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 2)), 1);
    }

    #[test]
    fn test_rental_days_floors_to_one() {
        // Same-day and inverted periods both bill a single day
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(rental_days(date(2024, 1, 4), date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_rental_snapshot_and_base_price() {
        let car = Car::new("C001", "Toyota", "Camry", 300_000).unwrap();
        let customer = Customer::new("Ayesha").unwrap();
        let rental = Rental::new(
            &car,
            &customer,
            date(2024, 1, 1),
            date(2024, 1, 4),
            Discount::from_percentage(10.0),
        );

        assert_eq!(rental.car_id, "C001");
        assert_eq!(rental.brand, "Toyota");
        assert_eq!(rental.customer_name, "Ayesha");
        assert_eq!(rental.days(), 3);
        assert_eq!(rental.base_price().paise(), 900_000);
    }
}
