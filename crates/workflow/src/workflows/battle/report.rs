use arena_domain::battle::{BattleIdentifier, BattleOutcome, BattleRound, Side};
use arena_domain::combatant::{Enemy, Player};

/// What a caller learns from one battle: its own rounds, the combatants as
/// they left the fight, and the whole log as it stood right after the append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    outcome: BattleOutcome,
    full_log: Vec<BattleRound>,
}

impl BattleReport {
    #[must_use]
    pub const fn new(outcome: BattleOutcome, full_log: Vec<BattleRound>) -> Self {
        Self { outcome, full_log }
    }

    #[must_use]
    pub const fn battle_identifier(&self) -> &BattleIdentifier {
        self.outcome.battle_identifier()
    }

    /// Rounds of this battle only.
    #[must_use]
    pub fn rounds(&self) -> &[BattleRound] {
        self.outcome.rounds()
    }

    /// Every round in the log, this battle's rounds last.
    #[must_use]
    pub fn full_log(&self) -> &[BattleRound] {
        &self.full_log
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        self.outcome.player()
    }

    #[must_use]
    pub const fn enemy(&self) -> &Enemy {
        self.outcome.enemy()
    }

    #[must_use]
    pub fn victor(&self) -> Side {
        self.outcome.victor()
    }
}
