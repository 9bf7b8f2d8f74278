// =============================================================================
// RegisterPlayerCommand
// =============================================================================

/// Raw input for a new player. Validated by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPlayerCommand {
    nickname: String,
    life: i32,
    attack: i32,
}

impl RegisterPlayerCommand {
    #[must_use]
    pub const fn new(nickname: String, life: i32, attack: i32) -> Self {
        Self {
            nickname,
            life,
            attack,
        }
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[must_use]
    pub const fn life(&self) -> i32 {
        self.life
    }

    #[must_use]
    pub const fn attack(&self) -> i32 {
        self.attack
    }
}

// =============================================================================
// RenamePlayerCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlayerCommand {
    current_nickname: String,
    new_nickname: String,
}

impl RenamePlayerCommand {
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
