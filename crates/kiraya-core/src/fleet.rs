//! # Fleet Inventory
//!
//! Owns the canonical set of cars, keyed by `car_id`, in insertion order.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Fleet Inventory Operations                           │
//! │                                                                         │
//! │  add_car(car) ───────► insert, or overwrite in place on duplicate id   │
//! │                        (last write wins - no uniqueness error)         │
//! │                                                                         │
//! │  get(id) ────────────► Option<&Car> - not-found is a normal outcome    │
//! │                                                                         │
//! │  list_available() ───► available cars, insertion order                 │
//! │                                                                         │
//! │  mark_rented(id) ────► flip availability; silent no-op on missing id   │
//! │  mark_returned(id)     (callers check existence via get() first)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Car;

/// The full set of cars known to the desk, regardless of availability.
///
/// Backed by a Vec so listings are always in insertion order. Fleets are
/// small (a desk, not a depot); linear find by id is the simplest thing
/// that preserves that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetInventory {
    cars: Vec<Car>,
}

impl FleetInventory {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        FleetInventory { cars: Vec::new() }
    }

    /// Adds a car, or overwrites the existing entry with the same id.
    ///
    /// Last write wins; the overwritten car keeps its original position in
    /// listings. Duplicate ids are not an error.
    pub fn add_car(&mut self, car: Car) {
        if let Some(existing) = self.cars.iter_mut().find(|c| c.car_id == car.car_id) {
            *existing = car;
        } else {
            self.cars.push(car);
        }
    }

    /// Looks up a car by id. Not-found is a normal, non-exceptional outcome.
    pub fn get(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.car_id == car_id)
    }

    /// All cars in insertion order, available or not.
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    /// Available cars in insertion order.
    pub fn list_available(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|c| c.is_available)
    }

    /// Flags a car as out on rent. Missing ids are silently ignored.
    pub fn mark_rented(&mut self, car_id: &str) {
        if let Some(car) = self.cars.iter_mut().find(|c| c.car_id == car_id) {
            car.is_available = false;
        }
    }

    /// Flags a car as back in the fleet. Missing ids are silently ignored.
    pub fn mark_returned(&mut self, car_id: &str) {
        if let Some(car) = self.cars.iter_mut().find(|c| c.car_id == car_id) {
            car.is_available = true;
        }
    }

    /// Number of cars in the fleet.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Checks if the fleet is empty.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str, price_paise: i64) -> Car {
        Car::new(id, "Toyota", "Camry", price_paise).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut fleet = FleetInventory::new();
        fleet.add_car(car("C001", 300_000));

        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.get("C001").unwrap().price_per_day_paise, 300_000);
        assert!(fleet.get("ZZZZ").is_none());
    }

    #[test]
    fn test_duplicate_id_overwrites_in_place() {
        let mut fleet = FleetInventory::new();
        fleet.add_car(car("C001", 300_000));
        fleet.add_car(car("C002", 320_000));
        fleet.add_car(car("C001", 350_000)); // last write wins

        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.get("C001").unwrap().price_per_day_paise, 350_000);

        // The overwrite kept C001 in first position
        let ids: Vec<&str> = fleet.iter().map(|c| c.car_id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "C002"]);
    }

    #[test]
    fn test_list_available_in_insertion_order() {
        let mut fleet = FleetInventory::new();
        fleet.add_car(car("C001", 300_000));
        fleet.add_car(car("C002", 320_000));
        fleet.add_car(car("C003", 700_000));
        fleet.mark_rented("C002");

        let ids: Vec<&str> = fleet.list_available().map(|c| c.car_id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "C003"]);
    }

    #[test]
    fn test_mark_rented_and_returned() {
        let mut fleet = FleetInventory::new();
        fleet.add_car(car("C001", 300_000));

        fleet.mark_rented("C001");
        assert!(!fleet.get("C001").unwrap().is_available);

        fleet.mark_returned("C001");
        assert!(fleet.get("C001").unwrap().is_available);
    }

    #[test]
    fn test_mark_on_missing_id_is_noop() {
        let mut fleet = FleetInventory::new();
        fleet.add_car(car("C001", 300_000));

        fleet.mark_rented("ZZZZ");
        fleet.mark_returned("ZZZZ");

        assert_eq!(fleet.len(), 1);
        assert!(fleet.get("C001").unwrap().is_available);
    }

    #[test]
    fn test_empty_fleet() {
        let fleet = FleetInventory::new();
        assert!(fleet.is_empty());
        assert_eq!(fleet.list_available().count(), 0);
    }
}
