use crate::helpers::{IntegrationTestContext, assert_json_has_key, assert_json_string_eq};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn health_check_returns_200_ok() {
    let context = IntegrationTestContext::new().await;

    let response = context.client.get("/health").await;

    assert_eq!(response.status_code(), 200);
    assert_json_string_eq(&response.body, "status", "ok");
    assert_json_has_key(&response.body, "version");
}

#[rstest]
#[tokio::test]
async fn every_response_carries_a_request_id() {
    let context = IntegrationTestContext::new().await;

    let response = context.client.get("/player/Nobody").await;

    assert_eq!(response.status_code(), 404);
    let request_id = response.header("x-request-id").expect("x-request-id missing");
    assert!(!request_id.is_empty());
}

#[rstest]
#[tokio::test]
async fn cors_allows_any_origin() {
    let context = IntegrationTestContext::new().await;

    let response = context.client.get("/health").await;

    assert!(
        response.has_header("access-control-allow-origin")
            || response.header("vary").is_some(),
        "Expected CORS headers on the response"
    );
}
