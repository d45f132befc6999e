//! # aimesh-client
//!
//! AiMesh AI 智能体消息分发服务的 Rust 客户端。
//!
//! Async client for the AiMesh AI-agent message-dispatch service.
//!
//! ## Overview
//!
//! This library exposes the service's JSON/HTTP protocol as typed operations
//! (send message, batch send, endpoint registration, budget management,
//! stats/health retrieval) and turns every transport or HTTP-level failure into
//! a single typed [`Error`] the caller can act on.
//!
//! ## Core Philosophy
//!
//! - **Relay, not broker**: routing, budgets and endpoint health live in the service
//! - **Classify once**: status codes and transport failures are mapped at the transport boundary
//! - **No hidden retries**: [`Error::is_retryable`] and [`Error::retry_after`] inform the caller's own policy
//! - **Hex payloads**: byte fields travel as lowercase hex text
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aimesh_client::{AiMeshClient, Error, Message};
//!
//! #[tokio::main]
//! async fn main() -> aimesh_client::Result<()> {
//!     let client = AiMeshClient::builder()
//!         .base_url("http://localhost:9000")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let msg = Message::new("my-agent", b"Hello, AI!".to_vec());
//!     match client.send_message(&msg).await {
//!         Ok(ack) => println!("processed in {}ms", ack.processing_latency_ms),
//!         Err(Error::RateLimited { retry_after, .. }) => {
//!             println!("retry in {}s", retry_after);
//!         }
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and configuration |
//! | [`types`] | Wire data model and its encode/decode contract |
//! | [`transport`] | HTTP exchange and failure classification |
//! | [`error_code`] | Error kinds and retry semantics |

pub mod client;
pub mod error_code;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{AiMeshClient, AiMeshClientBuilder, ClientConfig};
pub use error_code::ErrorKind;
pub use tokio_util::sync::CancellationToken;
pub use types::{
    Acknowledgment, BudgetInfo, EndpointMetrics, Message, RoutingDecision, RoutingScore,
    ServiceMap, ServiceValue, WireFormat,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
