//! Message: the unit of work submitted to AiMesh.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use super::hex::serde_hex;
use super::wire::WireFormat;

pub const DEFAULT_BUDGET_TOKENS: f64 = 1000.0;
pub const DEFAULT_PRIORITY: i32 = 50;
/// Offset applied to "now" when a message is encoded without an explicit deadline.
pub const DEFAULT_DEADLINE_OFFSET_MS: u64 = 60_000;

/// A message for agent communication.
///
/// `message_id` and `timestamp` are fixed at construction and only readable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub agent_id: String,
    message_id: String,
    #[serde(default, with = "serde_hex")]
    pub payload: Vec<u8>,
    #[serde(default)]
    pub estimated_cost_tokens: f64,
    #[serde(default = "default_budget_tokens")]
    pub budget_tokens: f64,
    /// Absolute deadline in epoch milliseconds. When unset, encoding fills in
    /// encode-time now + [`DEFAULT_DEADLINE_OFFSET_MS`].
    #[serde(default, serialize_with = "serialize_deadline")]
    pub deadline_ms: Option<u64>,
    #[serde(default)]
    pub task_graph_id: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Ordering hint, nominally 0-100. Not range-checked here.
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub dedup_context: String,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Creation time in epoch nanoseconds.
    #[serde(default = "now_epoch_nanos")]
    timestamp: u64,
}

impl Message {
    /// Create a message with a freshly generated UUIDv4 id.
    pub fn new(agent_id: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self::with_id(agent_id, Uuid::new_v4().to_string(), payload)
    }

    /// Create a message with a caller-supplied id.
    pub fn with_id(
        agent_id: impl Into<String>,
        message_id: impl Into<String>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            message_id: message_id.into(),
            payload: payload.into(),
            estimated_cost_tokens: 0.0,
            budget_tokens: DEFAULT_BUDGET_TOKENS,
            deadline_ms: None,
            task_graph_id: String::new(),
            dependencies: Vec::new(),
            priority: DEFAULT_PRIORITY,
            dedup_context: String::new(),
            trace_id: String::new(),
            metadata: HashMap::new(),
            timestamp: now_epoch_nanos(),
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn with_budget_tokens(mut self, tokens: f64) -> Self {
        self.budget_tokens = tokens;
        self
    }

    pub fn with_estimated_cost_tokens(mut self, tokens: f64) -> Self {
        self.estimated_cost_tokens = tokens;
        self
    }

    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_task_graph(
        mut self,
        task_graph_id: impl Into<String>,
        dependencies: Vec<String>,
    ) -> Self {
        self.task_graph_id = task_graph_id.into();
        self.dependencies = dependencies;
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }

    pub fn with_dedup_context(mut self, context: impl Into<String>) -> Self {
        self.dedup_context = context.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl WireFormat for Message {
    const ENTITY: &'static str = "Message";
}

fn default_budget_tokens() -> f64 {
    DEFAULT_BUDGET_TOKENS
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

fn serialize_deadline<S>(deadline: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = deadline.unwrap_or_else(|| now_epoch_millis() + DEFAULT_DEADLINE_OFFSET_MS);
    serializer.serialize_u64(value)
}

pub(crate) fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub(crate) fn now_epoch_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
