//! # Cafe Rust
//!
//! Coffee shop menu service.
//!
//! This crate provides a small backend for managing a coffee shop menu: a
//! CRUD surface for menu items, an order endpoint, and an operational
//! metrics endpoint in the Prometheus text exposition format. The HTTP API
//! is served via Axum.
//!
//! ## Features
//!
//! - **Menu CRUD**: Create, read, update, and delete coffee menu items
//! - **Orders**: Place an order against an existing menu item
//! - **Metrics**: Request counters, latency histograms, and domain counters
//!   exposed at `/metrics`
//! - **HTTP API**: RESTful endpoints with JSON request and response bodies
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`api`]: Contract types shared by the storage and HTTP layers
//! - [`config`]: Server configuration from TOML files and the environment
//! - [`db`]: Repository pattern, in-memory storage, and the service layer
//! - [`obs`]: Metrics primitives and the service metric registry
//! - [`http`]: Axum-based HTTP server, handlers, and error mapping

pub mod api;

pub mod config;

pub mod db;

pub mod obs;

#[cfg(feature = "http-server")]
pub mod http;
