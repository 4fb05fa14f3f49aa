//! Connector demos: one-shot clients for the vector connector's
//! `/vectors/insert` and `/health` endpoints.

pub mod cli;
pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;

pub use client::{ConnectorClient, VectorInsertRequest};
pub use demo::{run_health_check, run_insert, HealthCheckResult, InsertOutcome};
pub use error::*;
