use std::error::Error;
use std::fmt;

use crate::combatant::Combatant;

// =============================================================================
// BattleError
// =============================================================================

/// A battle could not start because one side has no life left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    PlayerOutOfLife { nickname: String, life: i32 },

    EnemyOutOfLife { nickname: String, life: i32 },
}

impl BattleError {
    pub fn player_out_of_life(player: &impl Combatant) -> Self {
        Self::PlayerOutOfLife {
            nickname: player.nickname().value().to_string(),
            life: player.life().value(),
        }
    }

    pub fn enemy_out_of_life(enemy: &impl Combatant) -> Self {
        Self::EnemyOutOfLife {
            nickname: enemy.nickname().value().to_string(),
            life: enemy.life().value(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::PlayerOutOfLife { nickname, life } => {
                format!("Player '{}' has no life remaining ({})", nickname, life)
            }
            Self::EnemyOutOfLife { nickname, life } => {
                format!("Enemy '{}' has no life remaining ({})", nickname, life)
            }
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for BattleError {}
