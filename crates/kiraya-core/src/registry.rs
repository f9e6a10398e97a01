//! # Customer Registry
//!
//! Owns the customers known to the desk, keyed by generated id, in
//! insertion order. Customers are registered when their first rental is
//! initiated and are never removed, even after the rental ends.

use serde::{Deserialize, Serialize};

use crate::types::Customer;

/// All customers the desk has ever registered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        CustomerRegistry {
            customers: Vec::new(),
        }
    }

    /// Registers a customer, overwriting any existing entry with the same
    /// id. Idempotent; last write wins. Generated ids make a collision a
    /// defect rather than a handled case, so no uniqueness error exists.
    pub fn register(&mut self, customer: Customer) {
        if let Some(existing) = self
            .customers
            .iter_mut()
            .find(|c| c.customer_id == customer.customer_id)
        {
            *existing = customer;
        } else {
            self.customers.push(customer);
        }
    }

    /// Looks up a customer by id.
    pub fn get(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.customer_id == customer_id)
    }

    /// All registered customers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    /// Number of registered customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CustomerRegistry::new();
        let customer = Customer::new("Ayesha").unwrap();
        let id = customer.customer_id.clone();

        registry.register(customer);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().name, "Ayesha");
        assert!(registry.get("CUS-00000000").is_none());
    }

    #[test]
    fn test_register_same_id_overwrites() {
        let mut registry = CustomerRegistry::new();
        let customer = Customer::new("Ayesha").unwrap();
        let id = customer.customer_id.clone();

        registry.register(customer.clone());

        let mut renamed = customer;
        renamed.name = "Ayesha Khan".to_string();
        registry.register(renamed);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().name, "Ayesha Khan");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = CustomerRegistry::new();
        registry.register(Customer::new("First").unwrap());
        registry.register(Customer::new("Second").unwrap());

        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
