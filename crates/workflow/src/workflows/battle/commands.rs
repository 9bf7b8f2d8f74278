// =============================================================================
// StartBattleCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartBattleCommand {
    player_nickname: String,
    enemy_nickname: String,
}

impl StartBattleCommand {
    #[must_use]
    pub const fn new(player_nickname: String, enemy_nickname: String) -> Self {
        Self {
            player_nickname,
            enemy_nickname,
        }
    }

    #[must_use]
    pub fn player_nickname(&self) -> &str {
        &self.player_nickname
    }

    #[must_use]
    pub fn enemy_nickname(&self) -> &str {
        &self.enemy_nickname
    }
}
