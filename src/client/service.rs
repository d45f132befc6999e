//! Service introspection: stats, Prometheus metrics, health.

use reqwest::Method;

use super::core::AiMeshClient;
use crate::types::ServiceMap;
use crate::Result;

impl AiMeshClient {
    pub async fn stats(&self) -> Result<ServiceMap> {
        self.transport
            .execute_json::<(), _>(Method::GET, &["stats"], None)
            .await
    }

    /// Prometheus exposition text from `GET /metrics`, returned verbatim.
    pub async fn metrics_text(&self) -> Result<String> {
        self.transport.execute_text(&["metrics"]).await
    }

    pub async fn health(&self) -> Result<ServiceMap> {
        self.transport
            .execute_json::<(), _>(Method::GET, &["health"], None)
            .await
    }
}
