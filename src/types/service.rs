//! Opaque documents returned by `/stats` and `/health`.
//!
//! Their shape is owned by the service, so they are kept as an ordered mapping of
//! string keys to a small value type instead of fixed structs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ServiceMap = BTreeMap<String, ServiceValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<ServiceValue>),
    Map(ServiceMap),
}

impl ServiceValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ServiceValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ServiceValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ServiceValue::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ServiceValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ServiceMap> {
        match self {
            ServiceValue::Map(m) => Some(m),
            _ => None,
        }
    }
}
