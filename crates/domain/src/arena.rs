//! The arena aggregate: the roster plus the battle log.

use crate::battle::{BattleIdentifier, BattleLog, BattleOutcome, DiceRoller, resolve_battle};
use crate::common::{DomainError, Nickname};
use crate::roster::{Roster, RosterError};

/// Everything the service keeps in memory.
///
/// All mutation goes through `&mut ArenaState`, so whoever owns the state
/// decides how writers are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaState {
    roster: Roster,
    battle_log: BattleLog,
}

impl ArenaState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    #[must_use]
    pub const fn battle_log(&self) -> &BattleLog {
        &self.battle_log
    }

    /// Resolves a battle between two registered combatants.
    ///
    /// On success the new life totals are written back to the roster and the
    /// rounds are appended to the log. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Roster`] when either nickname is unknown (player first)
    /// - [`DomainError::Battle`] when either side has no life left
    pub fn fight<D>(
        &mut self,
        player_nickname: &Nickname,
        enemy_nickname: &Nickname,
        battle_identifier: BattleIdentifier,
        dice: &mut D,
    ) -> Result<BattleOutcome, DomainError>
    where
        D: DiceRoller + ?Sized,
    {
        let player = self
            .roster
            .find_player(player_nickname)
            .cloned()
            .ok_or_else(|| RosterError::player_not_found(player_nickname))?;
        let enemy = self
            .roster
            .find_enemy(enemy_nickname)
            .cloned()
            .ok_or_else(|| RosterError::enemy_not_found(enemy_nickname))?;

        let outcome = resolve_battle(player, enemy, battle_identifier, dice)?;

        self.roster.replace_player(outcome.player().clone())?;
        self.roster.replace_enemy(outcome.enemy().clone())?;
        self.battle_log.append(outcome.rounds().iter().cloned());

        Ok(outcome)
    }
}

// =============================================================================
// Tests
// =============================================================================
