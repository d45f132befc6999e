use crate::mock_server::MockServerFixture;
use mockito::Matcher;
use serde_json::json;
use tokio_test::assert_ok;

#[tokio::test]
async fn set_then_get_budget() {
    let mut fx = MockServerFixture::new().await;
    let set = fx
        .server
        .mock("POST", "/budgets")
        .match_body(Matcher::Json(json!({"agent_id": "agent-x", "tokens": 50000.0})))
        .with_status(200)
        .with_body(json!({"status": "ok"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let get = fx
        .server
        .mock("GET", "/budgets/agent-x")
        .with_status(200)
        .with_body(
            json!({
                "agent_id": "agent-x",
                "initial_tokens": 50000.0,
                "remaining_tokens": 48750.0,
                "consumption_rate": 2.5
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = fx.client();
    assert_ok!(client.set_budget("agent-x", 50_000.0, None).await);
    let info = assert_ok!(client.get_budget("agent-x").await);

    assert_eq!(info.agent_id, "agent-x");
    assert!(info.remaining_tokens <= 50_000.0);
    assert_eq!(info.reset_at, None);
    assert!((info.utilization_percent() - 2.5).abs() < 1e-9);

    set.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn set_budget_sends_reset_at_when_given() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .server
        .mock("POST", "/budgets")
        .match_body(Matcher::Json(json!({
            "agent_id": "agent-y",
            "tokens": 10.0,
            "reset_at": 1_800_000_000_000_000_000u64
        })))
        .with_status(200)
        .create_async()
        .await;

    assert_ok!(
        fx.client()
            .set_budget("agent-y", 10.0, Some(1_800_000_000_000_000_000))
            .await
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn reset_budget_posts_to_reset_path() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .server
        .mock("POST", "/budgets/agent-x/reset")
        .with_status(200)
        .with_body(json!({"status": "reset"}).to_string())
        .expect(1)
        .create_async()
        .await;

    assert_ok!(fx.client().reset_budget("agent-x").await);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_budget_for_unused_agent() {
    let mut fx = MockServerFixture::new().await;
    let _mock = fx
        .server
        .mock("GET", "/budgets/fresh")
        .with_status(200)
        .with_body(json!({"agent_id": "fresh"}).to_string())
        .create_async()
        .await;

    let info = assert_ok!(fx.client().get_budget("fresh").await);
    assert_eq!(info.initial_tokens, 0.0);
    assert_eq!(info.utilization_percent(), 0.0);
}
