use std::error::Error;
use std::fmt;

use crate::common::Nickname;

// =============================================================================
// RosterError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    PlayerNotFound { nickname: String },

    EnemyNotFound { nickname: String },

    PlayerAlreadyExists { nickname: String },

    EnemyAlreadyExists { nickname: String },
}

impl RosterError {
    pub fn player_not_found(nickname: &Nickname) -> Self {
        Self::PlayerNotFound {
            nickname: nickname.value().to_string(),
        }
    }

    pub fn enemy_not_found(nickname: &Nickname) -> Self {
        Self::EnemyNotFound {
            nickname: nickname.value().to_string(),
        }
    }

    pub fn player_already_exists(nickname: &Nickname) -> Self {
        Self::PlayerAlreadyExists {
            nickname: nickname.value().to_string(),
        }
    }

    pub fn enemy_already_exists(nickname: &Nickname) -> Self {
        Self::EnemyAlreadyExists {
            nickname: nickname.value().to_string(),
        }
    }

    /// Kind of combatant the error is about, `"Player"` or `"Enemy"`.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Self::PlayerNotFound { .. } | Self::PlayerAlreadyExists { .. } => "Player",
            Self::EnemyNotFound { .. } | Self::EnemyAlreadyExists { .. } => "Enemy",
        }
    }

    pub fn nickname(&self) -> &str {
        match self {
            Self::PlayerNotFound { nickname }
            | Self::EnemyNotFound { nickname }
            | Self::PlayerAlreadyExists { nickname }
            | Self::EnemyAlreadyExists { nickname } => nickname,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlayerNotFound { .. } | Self::EnemyNotFound { .. }
        )
    }

    pub fn message(&self) -> String {
        match self {
            Self::PlayerNotFound { nickname } | Self::EnemyNotFound { nickname } => {
                format!("{} '{}' not found", self.entity_type(), nickname)
            }
            Self::PlayerAlreadyExists { nickname } | Self::EnemyAlreadyExists { nickname } => {
                format!("{} nickname '{}' already exists", self.entity_type(), nickname)
            }
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for RosterError {}
