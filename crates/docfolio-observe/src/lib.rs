//! Observability setup for docfolio: structured logging through `tracing`,
//! optionally bridged to OpenTelemetry.

pub mod tracing_setup;

pub use tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
