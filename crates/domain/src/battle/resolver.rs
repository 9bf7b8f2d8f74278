use super::{BattleError, BattleIdentifier, BattleRound, DiceRoller, Side};
use crate::combatant::{Combatant, Enemy, Player};

// =============================================================================
// BattleOutcome
// =============================================================================

/// Result of one resolved battle: both combatants after the fight and the
/// rounds this battle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleOutcome {
    battle_identifier: BattleIdentifier,
    player: Player,
    enemy: Enemy,
    rounds: Vec<BattleRound>,
}

impl BattleOutcome {
    #[must_use]
    pub const fn battle_identifier(&self) -> &BattleIdentifier {
        &self.battle_identifier
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub const fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    #[must_use]
    pub fn rounds(&self) -> &[BattleRound] {
        &self.rounds
    }

    /// The side still standing.
    #[must_use]
    pub fn victor(&self) -> Side {
        if self.player.is_alive() {
            Side::Player
        } else {
            Side::Enemy
        }
    }
}

// =============================================================================
// resolve_battle
// =============================================================================

/// Fights `player` against `enemy` until one of them has no life left.
///
/// Each round rolls one die. On 1 to 3 the enemy hits the player for its
/// attack; on 4 to 6 the player hits the enemy. Life is not clamped, so the
/// loser usually ends below zero. Every round lowers a life total by at least
/// one, which bounds the loop.
///
/// # Errors
///
/// Returns [`BattleError`] without rolling if either side already has life
/// `<= 0`. The player is checked first.
///
/// # Examples
///
/// ```
/// use arena_domain::battle::{BattleIdentifier, SeededDice, resolve_battle};
/// use arena_domain::combatant::{Combatant, Enemy, Player, PlayerLimits};
/// use arena_domain::common::{Nickname, RandomSeed};
///
/// let player = Player::register(Nickname::new("Hero").unwrap(), 10, 5, &PlayerLimits::default())
///     .unwrap();
/// let enemy = Enemy::spawn(Nickname::new("Goblin").unwrap(), RandomSeed::new(3));
/// let mut dice = SeededDice::from_seed(RandomSeed::new(11));
///
/// let outcome = resolve_battle(player, enemy, BattleIdentifier::new(), &mut dice).unwrap();
/// assert!(!outcome.player().is_alive() || !outcome.enemy().is_alive());
/// assert!(!outcome.rounds().is_empty());
/// ```
pub fn resolve_battle<D>(
    player: Player,
    enemy: Enemy,
    battle_identifier: BattleIdentifier,
    dice: &mut D,
) -> Result<BattleOutcome, BattleError>
where
    D: DiceRoller + ?Sized,
{
    if !player.is_alive() {
        return Err(BattleError::player_out_of_life(&player));
    }
    if !enemy.is_alive() {
        return Err(BattleError::enemy_out_of_life(&enemy));
    }

    let mut player = player;
    let mut enemy = enemy;
    let mut rounds = Vec::new();
    let mut round_number: u32 = 0;

    while player.is_alive() && enemy.is_alive() {
        let dice_value = dice.roll();

        match Side::for_roll(dice_value) {
            Side::Enemy => {
                let life = player.life().take_hit(enemy.attack());
                player = player.with_life(life);
            }
            Side::Player => {
                let life = enemy.life().take_hit(player.attack());
                enemy = enemy.with_life(life);
            }
        }

        round_number += 1;
        rounds.push(BattleRound::new(
            battle_identifier,
            round_number,
            player.nickname().clone(),
            enemy.nickname().clone(),
            dice_value,
        ));
    }

    Ok(BattleOutcome {
        battle_identifier,
        player,
        enemy,
        rounds,
    })
}

// =============================================================================
// Tests
// =============================================================================
