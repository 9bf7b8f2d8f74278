// =============================================================================
// SpawnEnemyCommand
// =============================================================================

/// Only the nickname is taken from the caller; stats are rolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnEnemyCommand {
    nickname: String,
}

impl SpawnEnemyCommand {
    #[must_use]
    pub const fn new(nickname: String) -> Self {
        Self { nickname }
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

// =============================================================================
// RenameEnemyCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEnemyCommand {
    current_nickname: String,
    new_nickname: String,
}

impl RenameEnemyCommand {
    #[must_use]
    pub const fn new(current_nickname: String, new_nickname: String) -> Self {
        Self {
            current_nickname,
            new_nickname,
        }
    }

    #[must_use]
    pub fn current_nickname(&self) -> &str {
        &self.current_nickname
    }

    #[must_use]
    pub fn new_nickname(&self) -> &str {
        &self.new_nickname
    }
}
