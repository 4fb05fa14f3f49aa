//! The two demo procedures and their console lines.
//!
//! Each runner makes one call through `ConnectorClient` and writes exactly one
//! line to the sink it is given. The insert demo lets any failure propagate;
//! the health check folds every request or decode failure into an error line.

use std::fmt;
use std::io::Write;

use serde_json::Value;

use crate::client::{ConnectorClient, VectorInsertRequest};
use crate::config::{ERROR_LABEL, HEALTH_LABEL, INSERT_LABEL};
use crate::error::Result;

/// Reply of a successful insert.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome(pub Value);

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", INSERT_LABEL, self.0)
    }
}

/// What the health check observed.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthCheckResult {
    Status(Value),
    Error(String),
}

impl HealthCheckResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, HealthCheckResult::Status(_))
    }
}

impl<E: std::error::Error> From<std::result::Result<Value, E>> for HealthCheckResult {
    fn from(result: std::result::Result<Value, E>) -> Self {
        match result {
            Ok(body) => HealthCheckResult::Status(body),
            Err(e) => HealthCheckResult::Error(error_chain(&e)),
        }
    }
}

/// Render an error followed by its sources, so "error sending request"
/// also says why.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl fmt::Display for HealthCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthCheckResult::Status(body) => write!(f, "{} {}", HEALTH_LABEL, body),
            HealthCheckResult::Error(message) => write!(f, "{} {}", ERROR_LABEL, message),
        }
    }
}

/// Send the fixed record and print the connector's reply.
pub async fn run_insert<W: Write>(client: &ConnectorClient, out: &mut W) -> Result<InsertOutcome> {
    let record = VectorInsertRequest::demo();
    let outcome = InsertOutcome(client.insert_vector(&record).await?);

    writeln!(out, "{}", outcome)?;
    tracing::info!(id = record.id, "Vector insert completed");
    Ok(outcome)
}

/// Probe the connector and print either its status or the failure.
pub async fn run_health_check<W: Write>(
    client: &ConnectorClient,
    out: &mut W,
) -> Result<HealthCheckResult> {
    let result = HealthCheckResult::from(client.health().await);

    if result.is_ok() {
        tracing::info!("Connector is healthy");
    } else {
        tracing::warn!(result = %result, base_url = client.base_url(), "Health check failed");
    }

    writeln!(out, "{}", result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_line_renders_compact_json() {
        let outcome = InsertOutcome(json!({"inserted": 1}));
        assert_eq!(outcome.to_string(), r#"Insert Response: {"inserted":1}"#);
    }

    #[test]
    fn health_line_renders_status() {
        let result = HealthCheckResult::Status(json!({"status": "ok"}));
        assert!(result.is_ok());
        assert_eq!(result.to_string(), r#"Health Check: {"status":"ok"}"#);
    }

    #[test]
    fn failure_keeps_error_text() {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let result: HealthCheckResult = Err::<Value, _>(err).into();
        assert!(!result.is_ok());
        assert_eq!(result.to_string(), "❌ Error: connection refused");
    }

    #[test]
    fn failure_includes_sources() {
        #[derive(Debug, thiserror::Error)]
        #[error("error sending request")]
        struct Outer(#[source] std::io::Error);

        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let result: HealthCheckResult = Err::<Value, _>(Outer(inner)).into();
        assert_eq!(
            result.to_string(),
            "❌ Error: error sending request: connection refused"
        );
    }
}
