//! Message submission: `POST /messages` and `POST /messages/batch`.

use reqwest::Method;
use std::collections::HashMap;

use super::core::AiMeshClient;
use crate::types::wire::{BatchRequest, BatchResponse};
use crate::types::{Acknowledgment, Message};
use crate::Result;

impl AiMeshClient {
    /// Send a message for processing.
    ///
    /// An unset `deadline_ms` is sent as now + 60s, computed for this call.
    pub async fn send_message(&self, message: &Message) -> Result<Acknowledgment> {
        self.transport
            .execute_json(Method::POST, &["messages"], Some(message))
            .await
    }

    /// Send several messages in one request.
    ///
    /// Acknowledgments come back in whatever order and number the service returns;
    /// match them to requests by `original_message_id`, not by index.
    pub async fn send_batch(&self, messages: &[Message]) -> Result<Vec<Acknowledgment>> {
        let response: BatchResponse = self
            .transport
            .execute_json(
                Method::POST,
                &["messages", "batch"],
                Some(&BatchRequest { messages }),
            )
            .await?;
        Ok(response.acknowledgments)
    }

    /// Build a message from the given fields and send it.
    pub async fn route_and_send(
        &self,
        agent_id: impl Into<String>,
        payload: impl Into<Vec<u8>>,
        budget_tokens: f64,
        priority: i32,
        metadata: HashMap<String, String>,
    ) -> Result<Acknowledgment> {
        let mut message = Message::new(agent_id, payload)
            .with_budget_tokens(budget_tokens)
            .with_priority(priority);
        message.metadata = metadata;
        self.send_message(&message).await
    }
}
