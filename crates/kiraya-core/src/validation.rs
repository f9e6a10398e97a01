//! # Validation Module
//!
//! Construction-time rule validation for Kiraya.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal input readers (apps/desk)                            │
//! │  ├── Format checks (parseable number, parseable date)                   │
//! │  └── Immediate re-prompt on bad input                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - constructor contracts                           │
//! │  ├── Car ids well-formed, prices non-negative                           │
//! │  ├── Customer names non-empty                                           │
//! │  └── Tax rate within 0-100%                                             │
//! │                                                                         │
//! │  Deliberately absent: discount upper bound and rental period order.     │
//! │  Those are priced permissively (clamp / day floor), not rejected.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a car id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 32 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_car_id;
///
/// assert!(validate_car_id("C001").is_ok());
/// assert!(validate_car_id("").is_err());
/// assert!(validate_car_id("C 001").is_err());
/// ```
pub fn validate_car_id(car_id: &str) -> ValidationResult<()> {
    let car_id = car_id.trim();

    if car_id.is_empty() {
        return Err(ValidationError::Required {
            field: "car_id".to_string(),
        });
    }

    if car_id.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "car_id".to_string(),
            max: 32,
        });
    }

    if !car_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "car_id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily rate in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional cars)
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_price_paise;
///
/// assert!(validate_price_paise(300_000).is_ok()); // Rs.3000.00
/// assert!(validate_price_paise(0).is_ok());
/// assert!(validate_price_paise(-100).is_err());
/// ```
pub fn validate_price_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_car_id() {
        // Valid ids
        assert!(validate_car_id("C001").is_ok());
        assert!(validate_car_id("FLEET-12").is_ok());
        assert!(validate_car_id("car_9").is_ok());

        // Invalid ids
        assert!(validate_car_id("").is_err());
        assert!(validate_car_id("   ").is_err());
        assert!(validate_car_id("C 001").is_err());
        assert!(validate_car_id(&"C".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ayesha Khan").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_paise() {
        assert!(validate_price_paise(0).is_ok());
        assert!(validate_price_paise(300_000).is_ok());
        assert!(validate_price_paise(-1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1800).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
