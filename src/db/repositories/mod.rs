//! Repository implementations module.
//!
//! This module contains the implementations of the `MenuRepository` trait:
//! - `local`: In-memory implementation used by the server and the test suites
pub mod local;

pub use local::LocalRepository;
