use serde_json::Value as JsonValue;

pub fn assert_json_has_key(json: &JsonValue, key: &str) {
    assert!(
        json.get(key).is_some(),
        "Expected JSON to have key '{}', got: {}",
        key,
        json
    );
}

pub fn assert_json_string_eq(json: &JsonValue, key: &str, expected: &str) {
    let actual = json
        .get(key)
        .and_then(JsonValue::as_str)
        .unwrap_or_else(|| panic!("Expected string at key '{}', got: {}", key, json));
    assert_eq!(actual, expected, "Mismatch at key '{}'", key);
}

pub fn assert_combatant(json: &JsonValue, nickname: &str, life: i64, attack: i64) {
    assert_json_string_eq(json, "nickname", nickname);
    assert_eq!(json["life"].as_i64(), Some(life), "life of {}", nickname);
    assert_eq!(json["attack"].as_i64(), Some(attack), "attack of {}", nickname);
}

/// Rounds of one battle share an id and count up from 1.
pub fn assert_single_battle(rounds: &[JsonValue]) {
    assert!(!rounds.is_empty(), "Expected at least one round");

    let battle_id = rounds[0]["id"].as_str().expect("round without id");
    for (index, round) in rounds.iter().enumerate() {
        assert_eq!(round["id"].as_str(), Some(battle_id));
        assert_eq!(round["round"].as_u64(), Some(index as u64 + 1));
    }
}
