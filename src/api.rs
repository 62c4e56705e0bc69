//! Public API surface for the coffee service.
//!
//! This file consolidates the contract types shared by the storage and HTTP layers.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Coffee identifier (assigned by the repository on creation).
///
/// Ids are never reused: deleting a coffee retires its id for the lifetime
/// of the repository.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CoffeeId(pub i64);

impl CoffeeId {
    pub fn new(value: i64) -> Self {
        CoffeeId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CoffeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CoffeeId> for i64 {
    fn from(id: CoffeeId) -> Self {
        id.0
    }
}

/// A coffee on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coffee {
    /// Unique identifier
    pub id: CoffeeId,
    /// Display name, e.g. "Latte"
    pub name: String,
    /// Price in the shop currency
    pub price: f64,
}

/// Input shape for creating or replacing a coffee. Carries no identity;
/// the repository assigns or preserves the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoffeeInput {
    /// Display name
    pub name: String,
    /// Price in the shop currency
    pub price: f64,
}

/// Input shape for placing an order against an existing coffee.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInput {
    /// Id of the coffee being ordered
    pub coffee_id: CoffeeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coffee_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&CoffeeId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: CoffeeId = serde_json::from_str("7").unwrap();
        assert_eq!(id, CoffeeId(7));
    }

    #[test]
    fn coffee_json_shape() {
        let coffee = Coffee {
            id: CoffeeId::new(1),
            name: "Latte".to_string(),
            price: 3.5,
        };
        let value = serde_json::to_value(&coffee).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Latte");
        assert_eq!(value["price"], 3.5);
    }

    #[test]
    fn coffee_input_rejects_missing_fields() {
        let err = serde_json::from_str::<CoffeeInput>(r#"{"name": "Mocha"}"#);
        assert!(err.is_err());

        let err = serde_json::from_str::<CoffeeInput>(r#"{"price": 3.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn order_input_round_trip() {
        let order: OrderInput = serde_json::from_str(r#"{"coffee_id": 3}"#).unwrap();
        assert_eq!(order.coffee_id, CoffeeId(3));
        assert_eq!(serde_json::to_string(&order).unwrap(), r#"{"coffee_id":3}"#);
    }
}
