use crate::helpers::{IntegrationTestContext, assert_single_battle};
use arena_domain::combatant::PlayerLimits;
use rstest::rstest;
use serde_json::json;

fn battle_request(player: &str, enemy: &str) -> serde_json::Value {
    json!({ "enemy": enemy, "player": player })
}

// =============================================================================
// Battle Flow
// =============================================================================

#[rstest]
#[tokio::test]
async fn battle_returns_its_rounds_and_updates_combatants() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 10, 5).await;
    context.create_enemy("Goblin").await;

    let response = context
        .client
        .post("/battle", &battle_request("Hero", "Goblin"))
        .await;

    assert_eq!(response.status_code(), 200);
    let rounds = response.rounds();
    assert_single_battle(rounds);
    for round in rounds {
        assert_eq!(round["player"], "Hero");
        assert_eq!(round["enemy"], "Goblin");
        let dice = round["diceThrown"].as_u64().unwrap();
        assert!((1..=6).contains(&dice));
        let expected_winner = if dice <= 3 { "Goblin" } else { "Hero" };
        assert_eq!(round["winner"], expected_winner);
    }

    let player = context.client.get("/player/Hero").await.body;
    let enemy = context.client.get("/enemy/Goblin").await.body;
    let player_alive = player["life"].as_i64().unwrap() > 0;
    let enemy_alive = enemy["life"].as_i64().unwrap() > 0;
    assert!(player_alive != enemy_alive, "exactly one side must fall");
}

#[rstest]
#[tokio::test]
async fn battles_are_fetchable_by_id_and_listed_in_order() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 10, 10).await;
    context.create_enemy("Goblin").await;
    context.create_enemy("Orc").await;

    let first = context
        .client
        .post("/battle", &battle_request("Hero", "Goblin"))
        .await;
    assert_eq!(first.status_code(), 200);
    let first_rounds = first.rounds().clone();

    let fetched = context
        .client
        .get(&format!("/battle/{}", first_rounds[0]["id"].as_str().unwrap()))
        .await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(fetched.rounds(), &first_rounds);

    let log = context.client.get("/battle").await;
    assert_eq!(log.status_code(), 200);
    assert_eq!(&log.rounds()[..first_rounds.len()], first_rounds.as_slice());
    assert_eq!(log.body, context.client.get("/battle").await.body);
}

#[rstest]
#[tokio::test]
async fn scope_all_returns_the_full_log() {
    let context = IntegrationTestContext::with_limits(PlayerLimits::new(1000).unwrap()).await;
    context.create_player("Hero", 1000, 10).await;
    context.create_enemy("Goblin").await;
    context.create_enemy("Orc").await;

    let first = context
        .client
        .post("/battle", &battle_request("Hero", "Goblin"))
        .await;
    assert_eq!(first.status_code(), 200);
    let first_len = first.rounds().len();

    let second = context
        .client
        .post("/battle?scope=all", &battle_request("Hero", "Orc"))
        .await;

    assert_eq!(second.status_code(), 200);
    assert!(second.rounds().len() > first_len);
    assert_eq!(&second.rounds()[..first_len], first.rounds().as_slice());
    assert_eq!(second.body, context.client.get("/battle").await.body);
}

// =============================================================================
// Failed Preconditions
// =============================================================================

#[rstest]
#[tokio::test]
async fn missing_player_is_reported_before_missing_enemy() {
    let context = IntegrationTestContext::new().await;

    let response = context
        .client
        .post("/battle", &battle_request("Nobody", "Dragon"))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "PLAYER_NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn missing_enemy_leaves_log_untouched() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 10, 5).await;

    let response = context
        .client
        .post("/battle", &battle_request("Hero", "Dragon"))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "ENEMY_NOT_FOUND");
    assert!(context.client.get("/battle").await.rounds().is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(" Goblin ")]
#[tokio::test]
async fn unresolvable_enemy_name_returns_404(#[case] enemy: &str) {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 10, 5).await;
    context.create_enemy("Goblin").await;

    let response = context
        .client
        .post("/battle", &battle_request("Hero", enemy))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "ENEMY_NOT_FOUND");
    assert!(context.client.get("/battle").await.rounds().is_empty());
}

#[rstest]
#[tokio::test]
async fn blank_enemy_still_reports_missing_player_first() {
    let context = IntegrationTestContext::new().await;

    let response = context
        .client
        .post("/battle", &battle_request("Nobody", ""))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "PLAYER_NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn fallen_combatant_cannot_fight_again() {
    let context = IntegrationTestContext::new().await;
    context.create_player("Hero", 10, 5).await;
    context.create_enemy("Goblin").await;

    let first = context
        .client
        .post("/battle", &battle_request("Hero", "Goblin"))
        .await;
    assert_eq!(first.status_code(), 200);
    let log_before = context.client.get("/battle").await.body;

    let rematch = context
        .client
        .post("/battle", &battle_request("Hero", "Goblin"))
        .await;

    assert_eq!(rematch.status_code(), 400);
    assert_eq!(rematch.error_code(), "INVALID_STATE");
    assert_eq!(context.client.get("/battle").await.body, log_before);
}

#[rstest]
#[tokio::test]
async fn malformed_battle_request_returns_400() {
    let context = IntegrationTestContext::new().await;

    let response = context
        .client
        .post_raw("/battle", "{ \"player\": \"Hero\" }")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.error_code(), "DECODE_ERROR");
}

#[rstest]
#[tokio::test]
async fn unknown_battle_returns_404() {
    let context = IntegrationTestContext::new().await;

    let response = context
        .client
        .get("/battle/550e8400-e29b-41d4-a716-446655440000")
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.error_code(), "BATTLE_NOT_FOUND");
}
