//! Response DTOs for API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// Combatant Responses
// =============================================================================

/// A player or an enemy. Life may be zero or negative after a lost battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantResponse {
    pub nickname: String,

    pub life: i32,

    pub attack: i32,
}

// =============================================================================
// Battle Responses
// =============================================================================

/// One round of the battle log.
///
/// # Examples
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "round": 1,
///   "enemy": "Goblin",
///   "player": "Hero",
///   "diceThrown": 2,
///   "winner": "Goblin"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRoundResponse {
    /// Identifier of the battle this round belongs to.
    pub id: String,

    pub round: u32,

    pub enemy: String,

    pub player: String,

    pub dice_thrown: u8,

    /// Nickname of the side that won the round.
    pub winner: String,
}

// =============================================================================
// Health Response
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    pub version: String,
}

// =============================================================================
// Error Response
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetailResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetailResponse {
    /// Error code for programmatic handling.
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetailResponse {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: JsonValue,
    ) -> Self {
        Self {
            error: ErrorDetailResponse {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }
}
