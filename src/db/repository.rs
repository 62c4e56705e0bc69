//! Repository trait for abstracting menu storage operations.
//!
//! This trait defines the interface for all storage operations, allowing
//! different implementations (in-memory, a future database backend) to be
//! swapped via dependency injection.

use async_trait::async_trait;

use crate::api::{Coffee, CoffeeId, CoffeeInput};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// Repository trait for coffee menu storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
///
/// # Error Handling
/// All methods return `RepositoryResult<T>` which wraps either the expected
/// return type or a `RepositoryError` describing what went wrong.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if the backend is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Menu Operations ====================

    /// List every coffee on the menu, ordered by ascending id.
    async fn list_coffees(&self) -> RepositoryResult<Vec<Coffee>>;

    /// Store a new coffee, assigning it the next unused id.
    ///
    /// # Arguments
    /// * `input` - Name and price of the new coffee
    ///
    /// # Returns
    /// * `Ok(Coffee)` - The stored coffee including its assigned id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_coffee(&self, input: &CoffeeInput) -> RepositoryResult<Coffee>;

    /// Retrieve a single coffee by id.
    ///
    /// # Returns
    /// * `Ok(Coffee)` - The stored coffee
    /// * `Err(RepositoryError::NotFound)` - If no coffee has that id
    async fn get_coffee(&self, coffee_id: CoffeeId) -> RepositoryResult<Coffee>;

    /// Replace the name and price of an existing coffee, keeping its id.
    ///
    /// # Returns
    /// * `Ok(Coffee)` - The updated coffee
    /// * `Err(RepositoryError::NotFound)` - If no coffee has that id
    async fn update_coffee(
        &self,
        coffee_id: CoffeeId,
        input: &CoffeeInput,
    ) -> RepositoryResult<Coffee>;

    /// Remove a coffee by id.
    ///
    /// # Returns
    /// * `Ok(())` - If the coffee was removed
    /// * `Err(RepositoryError::NotFound)` - If no coffee has that id
    async fn delete_coffee(&self, coffee_id: CoffeeId) -> RepositoryResult<()>;
}
