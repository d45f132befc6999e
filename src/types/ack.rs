use serde::{Deserialize, Serialize};

use super::hex::serde_hex;
use super::wire::WireFormat;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAILED: &str = "failed";

/// Outcome of processing a single [`super::Message`].
///
/// `status` is kept as the raw string: values outside `success`/`failed` still decode,
/// they simply are not successes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub original_message_id: String,
    pub status: String,
    #[serde(default)]
    pub tokens_used: f64,
    #[serde(default)]
    pub processing_latency_ms: u64,
    #[serde(default)]
    pub error: String,
    #[serde(default, with = "serde_hex")]
    pub result: Vec<u8>,
}

impl Acknowledgment {
    /// `true` only for [`STATUS_SUCCESS`]; [`STATUS_FAILED`] and any unrecognised
    /// status are failures.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl WireFormat for Acknowledgment {
    const ENTITY: &'static str = "Acknowledgment";
}
