//! Storage module for the coffee menu.
//!
//! This module provides abstractions for menu storage via the Repository pattern,
//! allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! The storage module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers)              │
//! └───────────────────┬─────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────┐
//! │  Service Layer (services.rs)                    │
//! │  - Operation logging                            │
//! │  - Order handling                               │
//! └───────────────────┬─────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────┐
//! │  Repository Trait (repository.rs)               │
//! └───────────────────┬─────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────┐
//! │  Local Repository (in-memory)                   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **Use the service layer functions; they work with any repository:**
//! ```ignore
//! use std::sync::Arc;
//! use cafe_rust::db::{services, LocalRepository, MenuRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo: Arc<dyn MenuRepository> = Arc::new(LocalRepository::new());
//!     let coffees = services::list_coffees(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

pub mod repositories;
pub mod repository;
pub mod services;

// ==================== Service Layer ====================

pub use services::{
    add_coffee, delete_coffee, get_coffee, health_check, list_coffees, place_order, update_coffee,
};

// ==================== Repository Pattern Exports ====================

pub use repositories::LocalRepository;
pub use repository::{MenuRepository, RepositoryError, RepositoryResult};
