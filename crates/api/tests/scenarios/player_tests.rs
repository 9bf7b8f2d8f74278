use crate::helpers::{IntegrationTestContext, assert_combatant};
use arena_domain::combatant::PlayerLimits;
use rstest::rstest;
use serde_json::json;

// =============================================================================
// Registration
// =============================================================================

#[rstest]
#[tokio::test]
async fn registered_player_is_listed_and_fetchable() {
    let context = IntegrationTestContext::new().await;

    let created = context
        .client
        .post("/player", &json!({ "nickname": "Hero", "life": 10, "attack": 5 }))
        .await;
    assert_eq!(created.status_code(), 201);
    assert_combatant(&created.body, "Hero", 10, 5);

    let listed = context.client.get("/player").await;
    assert_eq!(listed.status_code(), 200);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
    assert_combatant(&listed.body[0], "Hero", 10, 5);

    let fetched = context.client.get("/player/Hero").await;
    assert_eq!(fetched.status_code(), 200);
    assert_combatant(&fetched.body, "Hero", 10, 5);
}

#[rstest]
#[tokio::test]
async fn duplicate_nickname_returns_409() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 10, 5).await;

    let response = context
        .client
        .post("/player", &json!({ "nickname": "Hero", "life": 3, "attack": 3 }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[rstest]
#[tokio::test]
async fn player_and_enemy_may_share_a_nickname() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Shade", 10, 5).await;

    let response = context
        .client
        .post("/enemy", &json!({ "nickname": "Shade" }))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[rstest]
#[case(json!({ "nickname": "Hero", "life": 0, "attack": 5 }))]
#[case(json!({ "nickname": "Hero", "life": 11, "attack": 5 }))]
#[case(json!({ "nickname": "Hero", "life": 5, "attack": 0 }))]
#[case(json!({ "nickname": "Hero", "life": 5, "attack": 11 }))]
#[case(json!({ "nickname": "   ", "life": 5, "attack": 5 }))]
#[tokio::test]
async fn invalid_stats_return_400(#[case] request: serde_json::Value) {
    let context = IntegrationTestContext::new().await;

    let response = context.client.post("/player", &request).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert!(response.body["error"]["details"]["field"].is_string());
}

#[rstest]
#[tokio::test]
async fn raised_life_ceiling_accepts_larger_players() {
    let context = IntegrationTestContext::with_limits(PlayerLimits::new(100).unwrap()).await;

    let response = context
        .client
        .post("/player", &json!({ "nickname": "Titan", "life": 100, "attack": 10 }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_combatant(&response.body, "Titan", 100, 10);
}

#[rstest]
#[case("{ \"nickname\": \"Hero\" }")]
#[case("not json at all")]
#[case("{ \"nickname\": \"Hero\", \"life\": \"ten\", \"attack\": 5 }")]
#[tokio::test]
async fn undecodable_body_returns_400(#[case] body: &str) {
    let context = IntegrationTestContext::new().await;

    let response = context.client.post_raw("/player", body).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.error_code(), "DECODE_ERROR");
}

// =============================================================================
// Rename and Delete
// =============================================================================

#[rstest]
#[tokio::test]
async fn rename_keeps_stats_and_frees_old_nickname() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 8, 4).await;

    let renamed = context
        .client
        .put("/player/Hero", &json!({ "nickname": "Champion" }))
        .await;

    assert_eq!(renamed.status_code(), 200);
    assert_combatant(&renamed.body, "Champion", 8, 4);
    assert_eq!(context.client.get("/player/Hero").await.status_code(), 404);
    assert_eq!(context.client.get("/player/Champion").await.status_code(), 200);
}

#[rstest]
#[tokio::test]
async fn rename_onto_taken_nickname_returns_409() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 8, 4).await;
    context.create_player("Sidekick", 5, 2).await;

    let response = context
        .client
        .put("/player/Hero", &json!({ "nickname": "Sidekick" }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[rstest]
#[tokio::test]
async fn rename_of_missing_player_returns_404() {
    let context = IntegrationTestContext::new().await;

    let response = context
        .client
        .put("/player/Ghost", &json!({ "nickname": "Spirit" }))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "PLAYER_NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn delete_removes_player() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 8, 4).await;

    let deleted = context.client.delete("/player/Hero").await;
    assert_eq!(deleted.status_code(), 204);

    let missing = context.client.delete("/player/Hero").await;
    assert_eq!(missing.status_code(), 404);
    assert!(context.client.get("/player").await.body.as_array().unwrap().is_empty());
}
