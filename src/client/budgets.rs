//! Per-agent token budget calls.

use reqwest::Method;

use super::core::AiMeshClient;
use crate::types::{BudgetInfo, BudgetRequest};
use crate::Result;

impl AiMeshClient {
    /// Set an agent's token budget. `reset_at` is epoch nanoseconds.
    pub async fn set_budget(&self, agent_id: &str, tokens: f64, reset_at: Option<u64>) -> Result<()> {
        let request = BudgetRequest {
            agent_id: agent_id.to_string(),
            tokens,
            reset_at,
        };
        self.transport
            .execute_unit(Method::POST, &["budgets"], Some(&request))
            .await
    }

    pub async fn get_budget(&self, agent_id: &str) -> Result<BudgetInfo> {
        self.transport
            .execute_json::<(), _>(Method::GET, &["budgets", agent_id], None)
            .await
    }

    /// Reset an agent's budget to its initial value.
    pub async fn reset_budget(&self, agent_id: &str) -> Result<()> {
        self.transport
            .execute_unit::<()>(Method::POST, &["budgets", agent_id, "reset"], None)
            .await
    }
}
