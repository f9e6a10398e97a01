//! # kiraya-core: Pure Business Logic for Kiraya
//!
//! This crate is the **heart** of Kiraya. It contains all rental business
//! logic as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiraya Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal App (apps/desk)                     │   │
//! │  │    menu loop ──► input readers ──► seed data ──► logging        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiraya-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ Car, Rental│ │   Money   │  │ Pricing   │  │   rules   │  │   │
//! │  │   │  Customer │  │ TaxRate   │  │ Service   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   fleet   │  │ registry  │  │   desk    │                 │   │
//! │  │   │ inventory │  │ customers │  │ rentals   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO CLOCK                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, Customer, Rental, TaxRate, Discount)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Total price computation (discount, then tax)
//! - [`fleet`] - Fleet inventory (cars and their availability)
//! - [`registry`] - Customer registry
//! - [`desk`] - Rental desk: the active-rental ledger and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: every operation is deterministic for a given desk state
//! 2. **No I/O**: terminal, file system and network access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in paise (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kiraya_core::{Car, Discount, RentalDesk, TaxRate};
//!
//! let mut desk = RentalDesk::new(TaxRate::from_bps(1800)).unwrap(); // 18%
//! desk.add_car(Car::new("C001", "Toyota", "Camry", 300_000).unwrap());
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//!
//! // 3 days x Rs.3000.00, 10% off, 18% tax on the rest
//! let total = desk
//!     .preview_price("C001", start, end, Discount::from_bps(1000))
//!     .unwrap();
//! assert_eq!(total.paise(), 955_800); // Rs.9558.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod desk;
pub mod error;
pub mod fleet;
pub mod money;
pub mod pricing;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiraya_core::Money` instead of
// `use kiraya_core::money::Money`

pub use desk::{ActiveRental, RentalConfirmation, RentalDesk, ReturnSummary};
pub use error::{RentalError, RentalResult, ValidationError};
pub use fleet::FleetInventory;
pub use money::Money;
pub use pricing::PricingService;
pub use registry::CustomerRegistry;
pub use types::{rental_days, Car, Customer, Discount, Rental, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tax rate in basis points (1800 = 18%).
///
/// ## Why a constant?
/// The desk app and tests both seed a desk with the standard rate. The rate
/// is still injected through [`RentalDesk::new`], so a deployment with a
/// different rate only changes its caller, never this crate.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1800;

/// Prefix on every generated customer id (`CUS-1a2b3c4d`).
///
/// The prefix is cosmetic; uniqueness of the hex suffix is what matters.
pub const CUSTOMER_ID_PREFIX: &str = "CUS-";
