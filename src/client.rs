//! HTTP client for the vector connector.
//!
//! Wraps a single `reqwest::Client` and the connector base URL. Each method
//! performs exactly one request and decodes the body as untyped JSON; the
//! response status is not inspected.

use serde::Serialize;
use serde_json::Value;

use crate::config::{DEMO_VECTOR, DEMO_VECTOR_ID, HEALTH_PATH, INSERT_PATH};

/// Body of `POST /vectors/insert`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorInsertRequest {
    pub id: i64,
    pub vector: Vec<f64>,
}

impl VectorInsertRequest {
    /// The fixed record the insert demo sends.
    pub fn demo() -> Self {
        Self {
            id: DEMO_VECTOR_ID,
            vector: DEMO_VECTOR.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectorClient {
    http: reqwest::Client,
    base_url: String,
}

impl ConnectorClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Use an already configured `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST one record to the connector and return its JSON reply.
    pub async fn insert_vector(&self, record: &VectorInsertRequest) -> Result<Value, reqwest::Error> {
        let url = self.url(INSERT_PATH);
        tracing::debug!(%url, id = record.id, dims = record.vector.len(), "Inserting vector");

        let response = self.http.post(&url).json(record).send().await?;
        tracing::debug!(status = %response.status(), "Insert responded");

        response.json().await
    }

    /// GET the liveness probe and return its JSON reply.
    pub async fn health(&self) -> Result<Value, reqwest::Error> {
        let url = self.url(HEALTH_PATH);
        tracing::debug!(%url, "Checking connector health");

        let response = self.http.get(&url).send().await?;
        tracing::debug!(status = %response.status(), "Health responded");

        response.json().await
    }
}
