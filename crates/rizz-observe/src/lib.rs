//! Observability setup for RizzSite.

pub mod tracing_setup;
