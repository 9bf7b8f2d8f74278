use std::fmt;

use super::{BattleIdentifier, DiceValue};
use crate::common::Nickname;

/// The side that dealt damage in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side a roll hands the round to.
    #[must_use]
    pub const fn for_roll(dice_value: DiceValue) -> Self {
        if dice_value.favours_enemy() {
            Self::Enemy
        } else {
            Self::Player
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(formatter, "player"),
            Self::Enemy => write!(formatter, "enemy"),
        }
    }
}

/// One recorded round of a battle. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleRound {
    battle_identifier: BattleIdentifier,
    round: u32,
    player_nickname: Nickname,
    enemy_nickname: Nickname,
    dice_value: DiceValue,
    winner: Side,
}

impl BattleRound {
    #[must_use]
    pub fn new(
        battle_identifier: BattleIdentifier,
        round: u32,
        player_nickname: Nickname,
        enemy_nickname: Nickname,
        dice_value: DiceValue,
    ) -> Self {
        Self {
            battle_identifier,
            round,
            player_nickname,
            enemy_nickname,
            dice_value,
            winner: Side::for_roll(dice_value),
        }
    }

    #[must_use]
    pub const fn battle_identifier(&self) -> &BattleIdentifier {
        &self.battle_identifier
    }

    /// Position of the round within its battle, starting at 1.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn player_nickname(&self) -> &Nickname {
        &self.player_nickname
    }

    #[must_use]
    pub const fn enemy_nickname(&self) -> &Nickname {
        &self.enemy_nickname
    }

    #[must_use]
    pub const fn dice_value(&self) -> DiceValue {
        self.dice_value
    }

    #[must_use]
    pub const fn winner(&self) -> Side {
        self.winner
    }

    #[must_use]
    pub const fn winner_nickname(&self) -> &Nickname {
        match self.winner {
            Side::Player => &self.player_nickname,
            Side::Enemy => &self.enemy_nickname,
        }
    }
}
