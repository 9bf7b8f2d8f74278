use arena_domain::battle::{BattleIdentifier, SeededDice};
use arena_domain::common::Nickname;

use super::{BattleReport, StartBattleCommand};
use crate::errors::WorkflowError;
use crate::ports::{ArenaStore, RandomGenerator, WorkflowResult};

// =============================================================================
// Step 1: Parse Participants [Pure]
// =============================================================================

/// A battle names its sides exactly: a blank or padded name matches nobody.
fn parse_participant(raw: &str) -> Option<Nickname> {
    Nickname::new(raw)
        .ok()
        .filter(|nickname| nickname.value() == raw)
}

// =============================================================================
// Step 2: Prepare Dice [IO]
// =============================================================================

fn prepare_dice<R: RandomGenerator>(random: &R) -> SeededDice {
    SeededDice::from_seed(random.generate_seed())
}

// =============================================================================
// StartBattle Workflow
// =============================================================================

/// Fights a registered player against a registered enemy.
///
/// Lookup, resolution, write-back and the log append all happen inside one
/// exclusive store access. A battle therefore never interleaves with another
/// mutation, and a failed precondition changes nothing.
///
/// # Errors
///
/// - `NotFound` when the player or the enemy is unknown, blank names
///   included (player first)
/// - `InvalidState` when either side has life `<= 0`
pub async fn start_battle<S, R>(
    store: &S,
    random: &R,
    command: StartBattleCommand,
) -> WorkflowResult<BattleReport>
where
    S: ArenaStore,
    R: RandomGenerator,
{
    let player = parse_participant(command.player_nickname());
    let enemy = parse_participant(command.enemy_nickname());
    let battle_identifier = BattleIdentifier::new();
    let mut dice = prepare_dice(random);

    store
        .write(move |state| {
            let player = player
                .filter(|nickname| state.roster().find_player(nickname).is_some())
                .ok_or_else(|| WorkflowError::not_found("Player", command.player_nickname()))?;
            let enemy = enemy
                .ok_or_else(|| WorkflowError::not_found("Enemy", command.enemy_nickname()))?;

            let outcome = state.fight(&player, &enemy, battle_identifier, &mut dice)?;
            let full_log = state.battle_log().list_all().to_vec();
            Ok(BattleReport::new(outcome, full_log))
        })
        .await
}

// =============================================================================
// Tests
// =============================================================================
