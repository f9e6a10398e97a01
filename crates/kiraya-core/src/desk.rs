//! # Rental Desk
//!
//! The orchestrator: owns the fleet, the customer registry, the pricing
//! service and the ledger of active rentals, and runs the rent/return
//! state transitions across them.
//!
//! ## State Machine (per car, as seen through the ledger)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                rent(success)                                            │
//! │   ┌───────────┐ ───────────────► ┌──────────┐                          │
//! │   │ Available │                  │  Rented  │                          │
//! │   └───────────┘ ◄─────────────── └──────────┘                          │
//! │         │          return                │                              │
//! │         │                                │                              │
//! │    return ──► NotRented             rent ──► CarNotAvailable           │
//! │    (no-op, reported)                (no-op, reported)                  │
//! │                                                                         │
//! │   No other states exist - there is no reserved/pending intermediate.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ledger Invariant
//! A car has an entry in the ledger if and only if `is_available == false`,
//! and at most one entry exists per car. Both transitions run inside a
//! single `&mut self` call, so the check-then-mutate sequence cannot be
//! interleaved; callers sharing a desk across threads must put the whole
//! desk behind a `Mutex`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RentalError, RentalResult, ValidationError};
use crate::fleet::FleetInventory;
use crate::money::Money;
use crate::pricing::PricingService;
use crate::registry::CustomerRegistry;
use crate::types::{rental_days, Car, Customer, Discount, Rental, TaxRate};

// =============================================================================
// View & Response Types
// =============================================================================

/// Confirmation returned by a successful rent operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalConfirmation {
    pub car_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
}

/// Everything the desk prints when a car comes back.
///
/// Prices are recomputed at return time with the desk's current tax rate,
/// not cached from rent time. The rental record itself is discarded once
/// this summary is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnSummary {
    pub customer_id: String,
    pub customer_name: String,
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub base_price_paise: i64,
    pub discount_bps: u32,
    pub tax_rate_bps: u32,
    pub total_paise: i64,
}

impl ReturnSummary {
    /// Base price (rate × days, before discount and tax) as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_paise(self.base_price_paise)
    }

    /// Final charge as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }

    /// Discount that was applied.
    #[inline]
    pub fn discount(&self) -> Discount {
        Discount::from_bps(self.discount_bps)
    }

    /// Tax rate that was applied.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

/// Snapshot view of one active rental, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRental {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub customer_id: String,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
}

impl From<&Rental> for ActiveRental {
    fn from(rental: &Rental) -> Self {
        ActiveRental {
            car_id: rental.car_id.clone(),
            brand: rental.brand.clone(),
            model: rental.model.clone(),
            customer_id: rental.customer_id.clone(),
            customer_name: rental.customer_name.clone(),
            start_date: rental.start_date,
            end_date: rental.end_date,
            days: rental.days(),
        }
    }
}

// =============================================================================
// Rental Desk
// =============================================================================

/// In-memory rental desk state: fleet, customers, pricing, active ledger.
///
/// All state is owned here explicitly - no process-wide singletons. The
/// ledger is an insertion-ordered Vec keyed by `car_id`; `rent` enforces
/// at most one entry per car. Deliberately not deserializable: state only
/// enters through the operations, which uphold the ledger invariant.
#[derive(Debug, Clone)]
pub struct RentalDesk {
    fleet: FleetInventory,
    customers: CustomerRegistry,
    pricing: PricingService,
    rentals: Vec<Rental>,
}

impl RentalDesk {
    /// Creates an empty desk with the given tax rate.
    ///
    /// ## Errors
    /// Rejects a tax rate above 100% (see [`PricingService::new`]).
    pub fn new(tax_rate: TaxRate) -> Result<Self, ValidationError> {
        Ok(RentalDesk {
            fleet: FleetInventory::new(),
            customers: CustomerRegistry::new(),
            pricing: PricingService::new(tax_rate)?,
            rentals: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Fleet pass-throughs
    // -------------------------------------------------------------------------

    /// Fleet seeding hook: adds a car (last write wins on duplicate ids).
    pub fn add_car(&mut self, car: Car) {
        self.fleet.add_car(car);
    }

    /// The whole fleet, available or not.
    pub fn fleet(&self) -> &FleetInventory {
        &self.fleet
    }

    /// Available cars in insertion order.
    pub fn list_available_cars(&self) -> impl Iterator<Item = &Car> {
        self.fleet.list_available()
    }

    /// Looks up a car by id.
    pub fn get_car(&self, car_id: &str) -> Option<&Car> {
        self.fleet.get(car_id)
    }

    /// The customer registry (read-only).
    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    /// The configured tax rate (read-only, for display).
    pub fn tax_rate(&self) -> TaxRate {
        self.pricing.tax_rate()
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Quotes the total price for renting a car over a period.
    ///
    /// The car does not have to be available - a preview may be requested
    /// for any known car. No state is mutated.
    ///
    /// ## Errors
    /// [`RentalError::InvalidCarId`] if the car is unknown.
    pub fn preview_price(
        &self,
        car_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        discount: Discount,
    ) -> RentalResult<Money> {
        let car = self
            .fleet
            .get(car_id)
            .ok_or_else(|| RentalError::InvalidCarId(car_id.to_string()))?;

        let base = car.base_price(rental_days(start_date, end_date));
        Ok(self.pricing.compute_total(base, discount))
    }

    // -------------------------------------------------------------------------
    // State Transitions
    // -------------------------------------------------------------------------

    /// Rents a car to a new customer.
    ///
    /// Checks run before any mutation: an unknown id or an unavailable car
    /// leaves the desk untouched - no customer is created or registered.
    /// On success the three mutations (availability flag, registry insert,
    /// ledger insert) happen together inside this call.
    ///
    /// ## Errors
    /// - [`RentalError::InvalidCarId`] - no such car
    /// - [`RentalError::CarNotAvailable`] - car is already out
    /// - [`RentalError::Validation`] - empty customer name
    pub fn rent(
        &mut self,
        car_id: &str,
        customer_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        discount: Discount,
    ) -> RentalResult<RentalConfirmation> {
        let car = self
            .fleet
            .get(car_id)
            .ok_or_else(|| RentalError::InvalidCarId(car_id.to_string()))?;

        if !car.is_available {
            return Err(RentalError::CarNotAvailable(car_id.to_string()));
        }

        let customer = Customer::new(customer_name)?;
        let rental = Rental::new(car, &customer, start_date, end_date, discount);

        let confirmation = RentalConfirmation {
            car_id: rental.car_id.clone(),
            customer_id: customer.customer_id.clone(),
            customer_name: customer.name.clone(),
            start_date,
            end_date,
            days: rental.days(),
        };

        self.fleet.mark_rented(car_id);
        self.customers.register(customer);
        self.rentals.push(rental);

        Ok(confirmation)
    }

    /// Returns a car and produces the final charge summary.
    ///
    /// The base price and total are recomputed here with the current tax
    /// rate rather than replayed from rent time. The ledger entry is
    /// removed - returning is a terminal transition for the rental record.
    ///
    /// ## Errors
    /// [`RentalError::NotRented`] if the car has no active rental (never
    /// rented, already returned, or an unknown id - the ledger does not
    /// distinguish).
    pub fn return_car(&mut self, car_id: &str) -> RentalResult<ReturnSummary> {
        let index = self
            .rentals
            .iter()
            .position(|r| r.car_id == car_id)
            .ok_or_else(|| RentalError::NotRented(car_id.to_string()))?;

        let rental = self.rentals.remove(index);

        let days = rental.days();
        let base = rental.base_price();
        let total = self.pricing.compute_total(base, rental.discount);

        self.fleet.mark_returned(car_id);

        Ok(ReturnSummary {
            customer_id: rental.customer_id,
            customer_name: rental.customer_name,
            car_id: rental.car_id,
            brand: rental.brand,
            model: rental.model,
            start_date: rental.start_date,
            end_date: rental.end_date,
            days,
            base_price_paise: base.paise(),
            discount_bps: rental.discount.bps(),
            tax_rate_bps: self.pricing.tax_rate().bps(),
            total_paise: total.paise(),
        })
    }

    // -------------------------------------------------------------------------
    // Ledger Views
    // -------------------------------------------------------------------------

    /// Snapshot views of all active rentals, in insertion order.
    pub fn list_active(&self) -> impl Iterator<Item = ActiveRental> + '_ {
        self.rentals.iter().map(ActiveRental::from)
    }

    /// The active rental for a car, if any.
    pub fn active_rental(&self, car_id: &str) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.car_id == car_id)
    }

    /// Number of cars currently out.
    pub fn active_count(&self) -> usize {
        self.rentals.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
