//! AiMesh client interface.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Operations are grouped by service area in submodules under `src/client/`.

pub mod builder;
mod budgets;
pub mod config;
pub mod core;
mod endpoints;
mod messages;
mod service;

pub use builder::AiMeshClientBuilder;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::core::AiMeshClient;
