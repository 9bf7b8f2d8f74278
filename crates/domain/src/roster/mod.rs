//! The entity store: players and enemies keyed by nickname.

mod errors;

pub use errors::RosterError;

use crate::combatant::{Combatant, Enemy, Player};
use crate::common::Nickname;

// =============================================================================
// Roster
// =============================================================================

/// Players and enemies in insertion order.
///
/// Nicknames are unique within each kind; a player and an enemy may share one.
///
/// # Examples
///
/// ```
/// use arena_domain::combatant::{Enemy, Player, PlayerLimits};
/// use arena_domain::common::{Nickname, RandomSeed};
/// use arena_domain::roster::Roster;
///
/// let mut roster = Roster::new();
/// let hero = Nickname::new("Hero").unwrap();
///
/// roster
///     .add_player(Player::register(hero.clone(), 10, 5, &PlayerLimits::default()).unwrap())
///     .unwrap();
/// roster.add_enemy(Enemy::spawn(hero.clone(), RandomSeed::new(1))).unwrap();
///
/// assert!(roster.find_player(&hero).is_some());
/// assert!(roster.find_enemy(&hero).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
    enemies: Vec<Enemy>,
}

fn position_of<C: Combatant>(combatants: &[C], nickname: &Nickname) -> Option<usize> {
    combatants
        .iter()
        .position(|combatant| combatant.nickname() == nickname)
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[must_use]
    pub fn find_player(&self, nickname: &Nickname) -> Option<&Player> {
        position_of(&self.players, nickname).map(|index| &self.players[index])
    }

    #[must_use]
    pub fn find_enemy(&self, nickname: &Nickname) -> Option<&Enemy> {
        position_of(&self.enemies, nickname).map(|index| &self.enemies[index])
    }

    pub fn add_player(&mut self, player: Player) -> Result<&Player, RosterError> {
        if self.find_player(player.nickname()).is_some() {
            return Err(RosterError::player_already_exists(player.nickname()));
        }
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn add_enemy(&mut self, enemy: Enemy) -> Result<&Enemy, RosterError> {
        if self.find_enemy(enemy.nickname()).is_some() {
            return Err(RosterError::enemy_already_exists(enemy.nickname()));
        }
        self.enemies.push(enemy);
        Ok(&self.enemies[self.enemies.len() - 1])
    }

    /// Changes only the nickname of a player.
    ///
    /// Renaming to a nickname already in use fails, even when that nickname is
    /// the player's own.
    pub fn rename_player(
        &mut self,
        current: &Nickname,
        new: Nickname,
    ) -> Result<&Player, RosterError> {
        let index = position_of(&self.players, current)
            .ok_or_else(|| RosterError::player_not_found(current))?;
        if self.find_player(&new).is_some() {
            return Err(RosterError::player_already_exists(&new));
        }
        let renamed = self.players[index].clone().with_nickname(new);
        self.players[index] = renamed;
        Ok(&self.players[index])
    }

    /// Changes only the nickname of an enemy. Same rules as
    /// [`rename_player`](Self::rename_player).
    pub fn rename_enemy(
        &mut self,
        current: &Nickname,
        new: Nickname,
    ) -> Result<&Enemy, RosterError> {
        let index = position_of(&self.enemies, current)
            .ok_or_else(|| RosterError::enemy_not_found(current))?;
        if self.find_enemy(&new).is_some() {
            return Err(RosterError::enemy_already_exists(&new));
        }
        let renamed = self.enemies[index].clone().with_nickname(new);
        self.enemies[index] = renamed;
        Ok(&self.enemies[index])
    }

    /// Overwrites the stored player that has the same nickname.
    pub fn replace_player(&mut self, player: Player) -> Result<(), RosterError> {
        let index = position_of(&self.players, player.nickname())
            .ok_or_else(|| RosterError::player_not_found(player.nickname()))?;
        self.players[index] = player;
        Ok(())
    }

    /// Overwrites the stored enemy that has the same nickname.
    pub fn replace_enemy(&mut self, enemy: Enemy) -> Result<(), RosterError> {
        let index = position_of(&self.enemies, enemy.nickname())
            .ok_or_else(|| RosterError::enemy_not_found(enemy.nickname()))?;
        self.enemies[index] = enemy;
        Ok(())
    }

    pub fn remove_player(&mut self, nickname: &Nickname) -> Result<Player, RosterError> {
        position_of(&self.players, nickname)
            .map(|index| self.players.remove(index))
            .ok_or_else(|| RosterError::player_not_found(nickname))
    }

    pub fn remove_enemy(&mut self, nickname: &Nickname) -> Result<Enemy, RosterError> {
        position_of(&self.enemies, nickname)
            .map(|index| self.enemies.remove(index))
            .ok_or_else(|| RosterError::enemy_not_found(nickname))
    }
}

// =============================================================================
// Tests
// =============================================================================
