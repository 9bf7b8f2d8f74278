//! Request DTOs for API endpoints.

use serde::{Deserialize, Serialize};

// =============================================================================
// Combatant Requests
// =============================================================================

/// Request body for registering a player.
///
/// # Examples
///
/// ```json
/// { "nickname": "Hero", "life": 10, "attack": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub nickname: String,

    pub life: i32,

    pub attack: i32,
}

/// Request body for spawning an enemy.
///
/// Stats sent by the client are ignored; the server rolls them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnemyRequest {
    pub nickname: String,
}

/// Request body for renaming a player or an enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    /// The new nickname.
    pub nickname: String,
}

// =============================================================================
// Battle Requests
// =============================================================================

/// Request body for starting a battle.
///
/// # Examples
///
/// ```json
/// { "enemy": "Goblin", "player": "Hero" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBattleRequest {
    pub enemy: String,

    pub player: String,
}

/// Which rounds `POST /battle` answers with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleScope {
    /// Only the rounds of the battle just fought.
    #[default]
    Battle,
    /// The whole battle log.
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleQuery {
    #[serde(default)]
    pub scope: BattleScope,
}
