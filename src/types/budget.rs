use serde::{Deserialize, Serialize};

use super::wire::WireFormat;

/// Token allotment tracked by the service for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInfo {
    pub agent_id: String,
    #[serde(default)]
    pub initial_tokens: f64,
    #[serde(default)]
    pub remaining_tokens: f64,
    /// Tokens per second.
    #[serde(default)]
    pub consumption_rate: f64,
    /// Epoch nanoseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<u64>,
}

impl BudgetInfo {
    /// Percentage of the initial allotment already consumed.
    ///
    /// Returns `0.0` when `initial_tokens` is zero.
    pub fn utilization_percent(&self) -> f64 {
        if self.initial_tokens == 0.0 {
            return 0.0;
        }
        (self.initial_tokens - self.remaining_tokens) / self.initial_tokens * 100.0
    }
}

impl WireFormat for BudgetInfo {
    const ENTITY: &'static str = "BudgetInfo";
}

/// Body of `POST /budgets`. Only ever sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRequest {
    pub agent_id: String,
    pub tokens: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<u64>,
}
