//! Observability primitives for the coffee service.
//!
//! Request and domain metrics are kept in-process as atomics and rendered
//! into the Prometheus text exposition format by the `/metrics` handler.

pub mod metrics;

pub use metrics::CafeMetrics;
