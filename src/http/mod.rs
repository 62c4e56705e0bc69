//! HTTP server module for the coffee service.
//!
//! This module provides an axum-based HTTP server that exposes the menu as a
//! REST API. It reuses the service layer, repository pattern, and contract
//! types from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                      │
//! │  - Request parsing and validation                │
//! │  - JSON serialization/deserialization            │
//! │  - CORS, request tracking, error handling        │
//! └───────────────────┬──────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────┐
//! │  Service Layer (db/services.rs)                  │
//! │  - Menu logic and operation logging              │
//! └───────────────────┬──────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────┐
//! │  Repository Layer (db/)                          │
//! │  - LocalRepository (in-memory)                   │
//! └──────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
