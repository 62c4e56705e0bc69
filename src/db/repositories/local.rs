//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the `MenuRepository` trait
//! suitable for serving, unit testing, and local development. All data is
//! stored in memory behind a read-write lock, providing fast, deterministic,
//! and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Coffee, CoffeeId, CoffeeInput};
use crate::db::repository::{MenuRepository, RepositoryError, RepositoryResult};

/// The classic four-item menu the shop opened with.
const DEFAULT_MENU: [(&str, f64); 4] = [
    ("Espresso", 2.5),
    ("Latte", 3.5),
    ("Cappuccino", 3.0),
    ("Chai", 1.5),
];

/// In-memory local repository.
///
/// Cloning is cheap; clones share the same underlying menu.
///
/// # Example
/// ```
/// use cafe_rust::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::with_default_menu();
/// assert_eq!(repo.coffee_count(), 4);
///
/// repo.clear();
/// assert_eq!(repo.coffee_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    coffees: HashMap<CoffeeId, Coffee>,

    // ID counter. Never decremented, so ids stay unique across deletes.
    next_coffee_id: CoffeeId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            coffees: HashMap::new(),
            next_coffee_id: CoffeeId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a local repository pre-populated with the default menu.
    ///
    /// The four classics get ids 1 through 4; the next insert gets id 5.
    pub fn with_default_menu() -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            for (name, price) in DEFAULT_MENU {
                let id = data.next_coffee_id;
                data.next_coffee_id = CoffeeId(id.0 + 1);
                data.coffees.insert(
                    id,
                    Coffee {
                        id,
                        name: name.to_string(),
                        price,
                    },
                );
            }
        }
        repo
    }

    /// Set the health status, for exercising connection failure paths.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Remove every coffee and reset the id counter.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of coffees currently stored.
    pub fn coffee_count(&self) -> usize {
        self.data.read().coffees.len()
    }

    /// Check whether a coffee with the given id exists.
    pub fn has_coffee(&self, coffee_id: CoffeeId) -> bool {
        self.data.read().coffees.contains_key(&coffee_id)
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Local repository is unhealthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_coffees(&self) -> RepositoryResult<Vec<Coffee>> {
        self.check_health()?;

        let data = self.data.read();
        let mut coffees: Vec<Coffee> = data.coffees.values().cloned().collect();
        coffees.sort_by_key(|c| c.id);
        Ok(coffees)
    }

    async fn insert_coffee(&self, input: &CoffeeInput) -> RepositoryResult<Coffee> {
        self.check_health()?;

        let mut data = self.data.write();
        let id = data.next_coffee_id;
        data.next_coffee_id = CoffeeId(id.0 + 1);

        let coffee = Coffee {
            id,
            name: input.name.clone(),
            price: input.price,
        };
        data.coffees.insert(id, coffee.clone());
        Ok(coffee)
    }

    async fn get_coffee(&self, coffee_id: CoffeeId) -> RepositoryResult<Coffee> {
        self.check_health()?;

        let data = self.data.read();
        data.coffees
            .get(&coffee_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Coffee {} not found", coffee_id)))
    }

    async fn update_coffee(
        &self,
        coffee_id: CoffeeId,
        input: &CoffeeInput,
    ) -> RepositoryResult<Coffee> {
        self.check_health()?;

        let mut data = self.data.write();
        let coffee = data
            .coffees
            .get_mut(&coffee_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Coffee {} not found", coffee_id)))?;

        coffee.name = input.name.clone();
        coffee.price = input.price;
        Ok(coffee.clone())
    }

    async fn delete_coffee(&self, coffee_id: CoffeeId) -> RepositoryResult<()> {
        self.check_health()?;

        let mut data = self.data.write();
        if data.coffees.remove(&coffee_id).is_none() {
            return Err(RepositoryError::NotFound(format!(
                "Coffee {} not found",
                coffee_id
            )));
        }
        Ok(())
    }
}
