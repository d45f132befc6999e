//! Status and transport failure classification end to end.

use crate::mock_server::{closed_port_url, silent_server, MockServerFixture};
use aimesh_client::{AiMeshClient, CancellationToken, Error, ErrorKind, Message};
use serde_json::json;
use std::time::Duration;
use tokio_test::assert_err;

fn message() -> Message {
    Message::with_id("agent", "m-1", b"payload".to_vec())
}

async fn send_with_status(status: usize, headers: &[(&str, &str)], body: &str) -> Error {
    let mut fx = MockServerFixture::new().await;
    let mut mock = fx
        .server
        .mock("POST", "/messages")
        .with_status(status)
        .with_body(body);
    for (name, value) in headers {
        mock = mock.with_header(*name, *value);
    }
    let _mock = mock.create_async().await;

    assert_err!(fx.client().send_message(&message()).await)
}

#[tokio::test]
async fn rate_limit_carries_retry_after_header() {
    let err = send_with_status(429, &[("retry-after", "120")], "too many requests").await;
    match &err {
        Error::RateLimited {
            retry_after,
            message,
        } => {
            assert_eq!(*retry_after, 120);
            assert_eq!(message, "too many requests");
        }
        other => panic!("expected rate limit, got {:?}", other),
    }
    assert_eq!(err.retry_after(), Some(Duration::from_secs(120)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn rate_limit_defaults_retry_after_to_sixty() {
    let err = send_with_status(429, &[], "").await;
    assert!(matches!(err, Error::RateLimited { retry_after: 60, .. }), "got {:?}", err);

    let err = send_with_status(429, &[("retry-after", "soon")], "").await;
    assert!(matches!(err, Error::RateLimited { retry_after: 60, .. }), "got {:?}", err);
}

#[tokio::test]
async fn payment_required_is_budget_exceeded_with_unknown_fields() {
    let err = send_with_status(402, &[], "budget exhausted").await;
    match err {
        Error::BudgetExceeded {
            agent_id,
            required,
            available,
        } => {
            assert!(agent_id.is_none());
            assert!(required.is_none());
            assert!(available.is_none());
        }
        other => panic!("expected budget exceeded, got {:?}", other),
    }
}

#[tokio::test]
async fn payment_required_reads_structured_body() {
    let body = json!({"agent_id": "agent", "required": 900.0, "available": 100.0}).to_string();
    let err = send_with_status(402, &[], &body).await;
    assert!(!err.is_retryable());
    match err {
        Error::BudgetExceeded {
            agent_id,
            required,
            available,
        } => {
            assert_eq!(agent_id.as_deref(), Some("agent"));
            assert_eq!(required, Some(900.0));
            assert_eq!(available, Some(100.0));
        }
        other => panic!("expected budget exceeded, got {:?}", other),
    }
}

#[tokio::test]
async fn bad_request_is_validation_with_body() {
    let err = send_with_status(400, &[], "payload must be hex").await;
    match err {
        Error::Validation { field, message } => {
            assert_eq!(field, "request");
            assert_eq!(message, "payload must be hex");
        }
        other => panic!("expected validation, got {:?}", other),
    }
}

#[tokio::test]
async fn other_statuses_are_service_failures() {
    for status in [401usize, 500, 503] {
        let err = send_with_status(status, &[], "upstream says no").await;
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.status_code(), Some(status as u16));
        assert_eq!(err.is_retryable(), status >= 500);
    }
}

#[tokio::test]
async fn success_with_garbage_body_is_decode_failure() {
    let err = send_with_status(200, &[], "not json").await;
    match err {
        Error::Decode { body, .. } => assert_eq!(body, "not json"),
        other => panic!("expected decode failure, got {:?}", other),
    }
}

#[tokio::test]
async fn success_missing_required_ack_field_is_decode_failure() {
    let body = json!({"original_message_id": "m-1"}).to_string();
    let err = send_with_status(200, &[], &body).await;
    match err {
        Error::Decode { message, .. } => assert!(message.contains("status"), "{}", message),
        other => panic!("expected decode failure, got {:?}", other),
    }
}

#[tokio::test]
async fn refused_connection_is_connection_failure() {
    let url = closed_port_url();
    let client = AiMeshClient::new(&url).unwrap();

    let err = assert_err!(client.send_message(&message()).await);
    match &err {
        Error::Connection { url: target, .. } => {
            assert!(target.starts_with(&url), "{} vs {}", target, url);
            assert!(target.ends_with("/messages"));
        }
        other => panic!("expected connection failure, got {:?}", other),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn silent_server_is_timeout_failure() {
    let url = silent_server().await;
    let client = AiMeshClient::builder()
        .base_url(&url)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = assert_err!(client.health().await);
    match err {
        Error::Timeout { url: target } => assert_eq!(target, format!("{}/health", url)),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn cancellation_aborts_in_flight_request() {
    let url = silent_server().await;
    let token = CancellationToken::new();
    let client = AiMeshClient::new(&url).unwrap().with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = assert_err!(client.send_message(&message()).await);
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(!err.is_retryable());
    canceller.await.unwrap();
}

#[tokio::test]
async fn cancelled_token_does_not_affect_parent_client() {
    let mut fx = MockServerFixture::new().await;
    let _mock = fx
        .server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(json!({"status": "healthy"}).to_string())
        .create_async()
        .await;

    let client = fx.client();
    let token = CancellationToken::new();
    token.cancel();
    let cancelled = client.with_cancellation(token);

    let err = assert_err!(cancelled.health().await);
    assert!(matches!(err, Error::Cancelled { .. }));
    assert!(client.health().await.is_ok());
}

#[tokio::test]
async fn api_key_unfit_for_header_fails_at_build() {
    let err = AiMeshClient::builder()
        .base_url("http://localhost:9000")
        .api_key("bad\nkey")
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!err.is_retryable());
    assert_eq!(
        err.context().and_then(|ctx| ctx.field_path.as_deref()),
        Some("api_key")
    );
}
