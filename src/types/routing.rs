use serde::{Deserialize, Deserializer, Serialize};

use super::wire::WireFormat;

/// Diagnostic record describing how the service routed a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub message_id: String,
    pub target_endpoint: String,
    #[serde(default)]
    pub estimated_latency_ms: u64,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub routing_reason: String,
    #[serde(default)]
    pub fallback_endpoints: Vec<String>,
    /// Absent, `null` and `{}` all decode to `None`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_score"
    )]
    pub score_breakdown: Option<RoutingScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingScore {
    #[serde(default)]
    pub cost_score: f64,
    #[serde(default)]
    pub load_score: f64,
    #[serde(default)]
    pub latency_score: f64,
    #[serde(default)]
    pub total_score: f64,
}

impl WireFormat for RoutingDecision {
    const ENTITY: &'static str = "RoutingDecision";
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<RoutingScore>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Map<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    match raw {
        Some(map) if !map.is_empty() => serde_json::from_value(serde_json::Value::Object(map))
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
