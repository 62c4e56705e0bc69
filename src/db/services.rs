//! High-level menu service layer.
//!
//! This module provides repository-agnostic menu operations that work with
//! any implementation of the `MenuRepository` trait. Operation logging lives
//! here so every storage backend gets the same operational trace, and order
//! handling is kept out of the repositories entirely.
//!
//! # Usage
//!
//! ```no_run
//! use cafe_rust::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let coffees = services::list_coffees(&repo).await?;
//!     println!("{} coffees on the menu", coffees.len());
//!
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::{MenuRepository, RepositoryError, RepositoryResult};
use crate::api::{Coffee, CoffeeId, CoffeeInput, OrderInput};

// ==================== Health & Connection ====================

/// Check if the storage backend is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check(repo: &dyn MenuRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Menu Operations ====================

/// List every coffee on the menu.
pub async fn list_coffees(repo: &dyn MenuRepository) -> RepositoryResult<Vec<Coffee>> {
    info!("Fetching all coffee items.");
    repo.list_coffees().await
}

/// Add a new coffee to the menu, assigning it a fresh id.
pub async fn add_coffee(
    repo: &dyn MenuRepository,
    input: &CoffeeInput,
) -> RepositoryResult<Coffee> {
    let coffee = repo.insert_coffee(input).await?;
    info!(
        "Added new coffee: {} (id {}, price {})",
        coffee.name, coffee.id, coffee.price
    );
    Ok(coffee)
}

/// Fetch a single coffee by id.
pub async fn get_coffee(repo: &dyn MenuRepository, coffee_id: CoffeeId) -> RepositoryResult<Coffee> {
    match repo.get_coffee(coffee_id).await {
        Ok(coffee) => {
            info!("Fetching coffee item: {} (id {})", coffee.name, coffee.id);
            Ok(coffee)
        }
        Err(e) => {
            if matches!(e, RepositoryError::NotFound(_)) {
                warn!("Coffee item with ID {} not found.", coffee_id);
            }
            Err(e)
        }
    }
}

/// Replace the name and price of an existing coffee.
///
/// Missing ids are an error; an update never creates a record.
pub async fn update_coffee(
    repo: &dyn MenuRepository,
    coffee_id: CoffeeId,
    input: &CoffeeInput,
) -> RepositoryResult<Coffee> {
    match repo.update_coffee(coffee_id, input).await {
        Ok(coffee) => {
            info!("Updated coffee item: {} (id {})", coffee.name, coffee.id);
            Ok(coffee)
        }
        Err(e) => {
            if matches!(e, RepositoryError::NotFound(_)) {
                warn!("Update failed: coffee item with ID {} not found.", coffee_id);
            }
            Err(e)
        }
    }
}

/// Remove a coffee from the menu.
pub async fn delete_coffee(
    repo: &dyn MenuRepository,
    coffee_id: CoffeeId,
) -> RepositoryResult<()> {
    match repo.delete_coffee(coffee_id).await {
        Ok(()) => {
            info!("Deleted coffee item with ID {}.", coffee_id);
            Ok(())
        }
        Err(e) => {
            if matches!(e, RepositoryError::NotFound(_)) {
                warn!("Delete failed: coffee item with ID {} not found.", coffee_id);
            }
            Err(e)
        }
    }
}

// ==================== Orders ====================

/// Place an order for an existing coffee.
///
/// Orders are actions, not records: the repository is only consulted to
/// confirm the coffee exists, and the matching coffee is returned for the
/// confirmation message.
pub async fn place_order(
    repo: &dyn MenuRepository,
    order: &OrderInput,
) -> RepositoryResult<Coffee> {
    match repo.get_coffee(order.coffee_id).await {
        Ok(coffee) => {
            info!("Order placed for coffee: {} (id {})", coffee.name, coffee.id);
            Ok(coffee)
        }
        Err(e) => {
            if matches!(e, RepositoryError::NotFound(_)) {
                warn!(
                    "Order failed: coffee item with ID {} not found.",
                    order.coffee_id
                );
            }
            Err(e)
        }
    }
}
