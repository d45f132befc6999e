use crate::client::builder::AiMeshClientBuilder;
use crate::client::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::Result;
use tokio_util::sync::CancellationToken;

/// Client for the AiMesh message-dispatch service.
///
/// Holds only immutable configuration, so one instance (or its clones, which share
/// a connection pool) can issue independent calls from many tasks concurrently.
/// Calls are never retried; failures come back classified as [`crate::Error`].
#[derive(Clone)]
pub struct AiMeshClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: HttpTransport,
}

impl AiMeshClient {
    /// Client with default timeout and no credential.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        AiMeshClientBuilder::new().base_url(base_url).build()
    }

    pub fn builder() -> AiMeshClientBuilder {
        AiMeshClientBuilder::new()
    }

    /// Client configured from `AIMESH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        AiMeshClientBuilder::from_env()?.build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A client sharing this one's connection pool whose in-flight requests abort with
    /// [`crate::Error::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.with_cancellation(token),
        }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}

impl std::fmt::Debug for AiMeshClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiMeshClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
