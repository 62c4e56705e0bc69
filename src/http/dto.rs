//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies reuse the contract types from [`crate::api`]; this module
//! adds the response wrappers specific to the HTTP surface.

use serde::{Deserialize, Serialize};

// Re-export API types used directly by handlers
pub use crate::api::{Coffee, CoffeeId, CoffeeInput, OrderInput};

/// Response for the menu listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeListResponse {
    /// All coffees on the menu, ordered by ascending id
    pub coffees: Vec<Coffee>,
    /// Total number of coffees
    pub total: usize,
}

/// Confirmation returned after a successful order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Confirmation message
    pub message: String,
    /// Id of the ordered coffee
    pub coffee_id: CoffeeId,
}

/// Generic confirmation message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Menu storage status
    pub menu: String,
}
