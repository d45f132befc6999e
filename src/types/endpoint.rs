use serde::{Deserialize, Serialize};

use super::wire::WireFormat;

pub const DEFAULT_HEALTH_STATUS: &str = "healthy";

/// Capacity and health snapshot of an AI endpoint.
///
/// Used both to register an endpoint and as the element type of endpoint listings.
/// Ranges (`current_load <= capacity`, `error_rate` in `[0, 1]`) are the service's
/// concern and are not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointMetrics {
    pub endpoint_id: String,
    pub capacity: u64,
    pub current_load: u64,
    pub cost_per_1k_tokens: f64,
    pub latency_p99_ms: f64,
    pub error_rate: f64,
    #[serde(default = "default_health_status")]
    pub health_status: String,
}

impl EndpointMetrics {
    pub fn new(
        endpoint_id: impl Into<String>,
        capacity: u64,
        cost_per_1k_tokens: f64,
        latency_p99_ms: f64,
    ) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            capacity,
            current_load: 0,
            cost_per_1k_tokens,
            latency_p99_ms,
            error_rate: 0.0,
            health_status: default_health_status(),
        }
    }

    pub fn with_current_load(mut self, load: u64) -> Self {
        self.current_load = load;
        self
    }

    pub fn with_error_rate(mut self, rate: f64) -> Self {
        self.error_rate = rate;
        self
    }

    pub fn with_health_status(mut self, status: impl Into<String>) -> Self {
        self.health_status = status.into();
        self
    }
}

impl WireFormat for EndpointMetrics {
    const ENTITY: &'static str = "EndpointMetrics";
}

fn default_health_status() -> String {
    DEFAULT_HEALTH_STATUS.to_string()
}
