use crate::helpers::IntegrationTestContext;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn spawned_enemy_has_rolled_stats() {
    let context = IntegrationTestContext::new().await;

    let enemy = context.create_enemy("Goblin").await;

    assert_eq!(enemy["nickname"], "Goblin");
    let life = enemy["life"].as_i64().unwrap();
    let attack = enemy["attack"].as_i64().unwrap();
    assert!((1..=10).contains(&life));
    assert!((1..=10).contains(&attack));
}

#[rstest]
#[tokio::test]
async fn client_supplied_stats_are_ignored() {
    let context = IntegrationTestContext::with_seed(99).await;
    let reference = IntegrationTestContext::with_seed(99).await;

    let with_stats = context
        .client
        .post(
            "/enemy",
            &json!({ "nickname": "Goblin", "life": 1000, "attack": 1000 }),
        )
        .await;
    let plain = reference.create_enemy("Goblin").await;

    assert_eq!(with_stats.status_code(), 201);
    assert_eq!(with_stats.body, plain);
}

#[rstest]
#[tokio::test]
async fn same_seed_spawns_same_enemies() {
    let first = IntegrationTestContext::with_seed(5).await;
    let second = IntegrationTestContext::with_seed(5).await;

    for nickname in ["Goblin", "Orc", "Troll"] {
        assert_eq!(
            first.create_enemy(nickname).await,
            second.create_enemy(nickname).await
        );
    }
}

#[rstest]
#[tokio::test]
async fn duplicate_enemy_returns_409() {
    let context = IntegrationTestContext::new().await;
    context.create_enemy("Goblin").await;

    let response = context
        .client
        .post("/enemy", &json!({ "nickname": "Goblin" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[rstest]
#[tokio::test]
async fn enemy_lifecycle() {
    let context = IntegrationTestContext::new().await;
    let spawned = context.create_enemy("Goblin").await;

    let renamed = context
        .client
        .put("/enemy/Goblin", &json!({ "nickname": "Hobgoblin" }))
        .await;
    assert_eq!(renamed.status_code(), 200);
    assert_eq!(renamed.body["nickname"], "Hobgoblin");
    assert_eq!(renamed.body["life"], spawned["life"]);
    assert_eq!(renamed.body["attack"], spawned["attack"]);

    let listed = context.client.get("/enemy").await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    assert_eq!(context.client.delete("/enemy/Hobgoblin").await.status_code(), 204);
    assert_eq!(context.client.get("/enemy/Hobgoblin").await.status_code(), 404);
}

#[rstest]
#[tokio::test]
async fn missing_enemy_returns_enemy_not_found() {
    let context = IntegrationTestContext::new().await;

    let response = context.client.get("/enemy/Dragon").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "ENEMY_NOT_FOUND");
}
