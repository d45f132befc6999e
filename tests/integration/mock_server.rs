//! Mock HTTP server setup for integration tests

use aimesh_client::{Acknowledgment, AiMeshClient};
use mockito::{Server, ServerGuard};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

pub const API_KEY: &str = "test-api-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server, authenticated with [`API_KEY`].
    pub fn client(&self) -> AiMeshClient {
        AiMeshClient::builder()
            .base_url(&self.base_url)
            .api_key(API_KEY)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client should build")
    }

    /// Client pointed at the mock server without a credential.
    pub fn anonymous_client(&self) -> AiMeshClient {
        AiMeshClient::new(&self.base_url).expect("client should build")
    }
}

/// Install a test subscriber once; `RUST_LOG=aimesh_client=debug` shows request logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn ack_json(message_id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "original_message_id": message_id,
        "status": status,
        "tokens_used": 42.0,
        "processing_latency_ms": 12,
        "error": "",
        "result": "6f6b"
    })
}

pub fn assert_ack(ack: &Acknowledgment, message_id: &str) {
    assert_eq!(ack.original_message_id, message_id);
    assert_eq!(ack.result, b"ok".to_vec());
}

/// Accepts TCP connections and never answers them.
pub async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind silent listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", addr)
}

/// An address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
