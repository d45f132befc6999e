use crate::client::config::ClientConfig;
use crate::client::core::AiMeshClient;
use crate::transport::HttpTransport;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
#[derive(Debug, Clone, Default)]
pub struct AiMeshClientBuilder {
    config: ClientConfig,
}

impl AiMeshClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the environment (`AIMESH_BASE_URL`, `AIMESH_TIMEOUT_SECS`, `AIMESH_API_KEY`).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            config: ClientConfig::from_env()?,
        })
    }

    /// Set the service base URL. A trailing `/` is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AiMeshClient> {
        let transport = HttpTransport::new(&self.config)?;
        Ok(AiMeshClient {
            config: self.config,
            transport,
        })
    }
}
