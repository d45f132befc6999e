//! Endpoint registry calls.

use reqwest::Method;

use super::core::AiMeshClient;
use crate::types::wire::EndpointList;
use crate::types::EndpointMetrics;
use crate::Result;

impl AiMeshClient {
    /// Register an AI endpoint (`POST /endpoints`).
    pub async fn register_endpoint(&self, metrics: &EndpointMetrics) -> Result<()> {
        self.transport
            .execute_unit(Method::POST, &["endpoints"], Some(metrics))
            .await
    }

    /// List registered endpoints. Entries without `health_status` read as `"healthy"`.
    pub async fn list_endpoints(&self) -> Result<Vec<EndpointMetrics>> {
        let list: EndpointList = self
            .transport
            .execute_json::<(), _>(Method::GET, &["endpoints"], None)
            .await?;
        Ok(list.endpoints)
    }

    /// Remove an endpoint (`DELETE /endpoints/{id}`).
    pub async fn remove_endpoint(&self, endpoint_id: &str) -> Result<()> {
        self.transport
            .execute_unit::<()>(Method::DELETE, &["endpoints", endpoint_id], None)
            .await
    }
}
