//! 类型系统模块：AiMesh 线上数据模型。
//!
//! # Types Module
//!
//! Wire data model exchanged with the AiMesh service. Every entity implements
//! [`WireFormat`], giving a symmetric `encode`/`decode` pair over JSON values.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Unit of work submitted for processing |
//! | [`Acknowledgment`] | Outcome of processing one message |
//! | [`RoutingDecision`] | Diagnostic record of how a message was routed |
//! | [`EndpointMetrics`] | Capacity/health snapshot of an AI endpoint |
//! | [`BudgetInfo`] | Per-agent token allotment |
//! | [`ServiceMap`] | Opaque stats/health document |
//!
//! ## Byte Payloads
//!
//! Byte fields travel as lowercase hex text, never base64 (see [`hex`]).
//!
//! ## Example
//!
//! ```rust
//! use aimesh_client::types::{Message, WireFormat};
//!
//! let msg = Message::new("my-agent", b"Hello, AI!".to_vec())
//!     .with_priority(80)
//!     .with_deadline_ms(1_700_000_060_000);
//! let wire = msg.encode().unwrap();
//! assert_eq!(wire["payload"], "48656c6c6f2c20414921");
//! assert_eq!(Message::decode(wire).unwrap(), msg);
//! ```

pub mod ack;
pub mod budget;
pub mod endpoint;
pub mod hex;
pub mod message;
pub mod routing;
pub mod service;
pub mod wire;

pub use ack::Acknowledgment;
pub use budget::{BudgetInfo, BudgetRequest};
pub use endpoint::EndpointMetrics;
pub use message::Message;
pub use routing::{RoutingDecision, RoutingScore};
pub use service::{ServiceMap, ServiceValue};
pub use wire::WireFormat;
