//! Symmetric encode/decode contract shared by every wire entity, plus the request and
//! response envelopes used by batch and listing endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Acknowledgment, EndpointMetrics, Message};
use crate::{Error, Result};

/// JSON wire representation of an entity.
///
/// Decoding substitutes documented defaults for absent optional keys and fails with
/// [`Error::Validation`] when a required key is missing or malformed.
pub trait WireFormat: Serialize + DeserializeOwned {
    /// Name used as the `field` of validation errors.
    const ENTITY: &'static str;

    fn encode(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::from_wire(Self::ENTITY, e))
    }

    fn decode(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::from_wire(Self::ENTITY, e))
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::from_wire(Self::ENTITY, e))
    }

    fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::from_wire(Self::ENTITY, e))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchRequest<'a> {
    pub messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchResponse {
    #[serde(default)]
    pub acknowledgments: Vec<Acknowledgment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EndpointList {
    #[serde(default)]
    pub endpoints: Vec<EndpointMetrics>,
}
