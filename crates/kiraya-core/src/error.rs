//! # Error Types
//!
//! Domain-specific error types for kiraya-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiraya-core errors (this file)                                         │
//! │  ├── RentalError      - Expected, recoverable rental outcomes           │
//! │  └── ValidationError  - Construction-time contract violations           │
//! │                                                                         │
//! │  Flow: ValidationError → RentalError → caller (printed by the desk app) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (car id, field name)
//! 3. Errors are enum variants, never String
//! 4. Every rental error is an expected outcome, reported as a value —
//!    nothing here is fatal and nothing is silently swallowed

use thiserror::Error;

// =============================================================================
// Rental Error
// =============================================================================

/// Expected, recoverable outcomes of rental desk operations.
#[derive(Debug, Error)]
pub enum RentalError {
    /// The referenced car does not exist in the fleet.
    ///
    /// ## When This Occurs
    /// - Preview or rent requested for an unknown car id
    /// - Typo at the terminal; the caller re-prompts
    #[error("Invalid car id: {0}")]
    InvalidCarId(String),

    /// The car exists but is currently out on rent.
    ///
    /// Rent on a rented car is a no-op transition: the existing rental and
    /// the car's state are left untouched.
    #[error("Car {0} is not available for rent")]
    CarNotAvailable(String),

    /// Return requested for a car with no active rental.
    ///
    /// Covers both "never rented" and "already returned"; the ledger does
    /// not distinguish them.
    #[error("Car {0} has no active rental")]
    NotRented(String),

    /// Construction-time validation failure (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction-time contract violations.
///
/// These are programming or configuration errors (negative price, empty
/// id), rejected when the value is built rather than when it is used.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. disallowed characters in an id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_error_messages() {
        assert_eq!(
            RentalError::InvalidCarId("ZZZZ".to_string()).to_string(),
            "Invalid car id: ZZZZ"
        );
        assert_eq!(
            RentalError::CarNotAvailable("C001".to_string()).to_string(),
            "Car C001 is not available for rent"
        );
        assert_eq!(
            RentalError::NotRented("C002".to_string()).to_string(),
            "Car C002 has no active rental"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().starts_with("price must be between 0"));
    }

    #[test]
    fn test_validation_converts_to_rental_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let rental_err: RentalError = validation_err.into();
        assert!(matches!(rental_err, RentalError::Validation(_)));
    }
}
