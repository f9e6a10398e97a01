//! # Fleet Seeding
//!
//! The desk starts with a built-in three-car fleet, or with the contents
//! of a JSON fleet file passed via `--fleet`:
//!
//! ```json
//! [
//!   { "carId": "C001", "brand": "Toyota", "model": "Camry", "pricePerDayPaise": 300000 }
//! ]
//! ```

use std::fs;

use serde::{Deserialize, Serialize};

use kiraya_core::{Car, RentalDesk, ValidationError};

/// Built-in fleet: (car id, brand, model, daily rate in paise).
const DEFAULT_FLEET: &[(&str, &str, &str, i64)] = &[
    ("C001", "Toyota", "Camry", 300_000),
    ("C002", "Honda", "Accord", 320_000),
    ("C003", "Mahindra", "Thar", 700_000),
];

/// A car entry in a fleet seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSpec {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub price_per_day_paise: i64,
}

impl CarSpec {
    /// Builds the fleet car, running the usual construction validation.
    pub fn into_car(self) -> Result<Car, ValidationError> {
        Car::new(self.car_id, self.brand, self.model, self.price_per_day_paise)
    }
}

/// Seeds the built-in default fleet.
pub fn seed_default(desk: &mut RentalDesk) -> Result<(), ValidationError> {
    for &(car_id, brand, model, price_paise) in DEFAULT_FLEET {
        desk.add_car(Car::new(car_id, brand, model, price_paise)?);
    }
    Ok(())
}

/// Seeds the desk from a JSON fleet file. Returns how many cars were read.
pub fn load_fleet_file(
    desk: &mut RentalDesk,
    path: &str,
) -> Result<usize, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let specs: Vec<CarSpec> = serde_json::from_str(&text)?;
    let count = specs.len();

    for spec in specs {
        desk.add_car(spec.into_car()?);
    }

    Ok(count)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kiraya_core::{TaxRate, DEFAULT_TAX_RATE_BPS};

    fn empty_desk() -> RentalDesk {
        RentalDesk::new(TaxRate::from_bps(DEFAULT_TAX_RATE_BPS)).unwrap()
    }

    #[test]
    fn test_seed_default_fleet() {
        let mut desk = empty_desk();
        seed_default(&mut desk).unwrap();

        assert_eq!(desk.fleet().len(), 3);
        assert_eq!(desk.list_available_cars().count(), 3);
        assert_eq!(desk.get_car("C001").unwrap().price_per_day_paise, 300_000);
    }

    #[test]
    fn test_car_spec_parses_camel_case() {
        let json = r#"{
            "carId": "C010",
            "brand": "Suzuki",
            "model": "Alto",
            "pricePerDayPaise": 150000
        }"#;
        let spec: CarSpec = serde_json::from_str(json).unwrap();
        let car = spec.into_car().unwrap();

        assert_eq!(car.car_id, "C010");
        assert_eq!(car.price_per_day_paise, 150_000);
        assert!(car.is_available);
    }

    #[test]
    fn test_car_spec_rejects_negative_price() {
        let spec = CarSpec {
            car_id: "C010".to_string(),
            brand: "Suzuki".to_string(),
            model: "Alto".to_string(),
            price_per_day_paise: -1,
        };
        assert!(spec.into_car().is_err());
    }
}
