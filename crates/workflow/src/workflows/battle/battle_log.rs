use std::str::FromStr;

use arena_domain::battle::{BattleIdentifier, BattleRound};

use crate::errors::WorkflowError;
use crate::ports::{ArenaStore, WorkflowResult};

/// Returns every round ever fought, in the order they were recorded.
pub async fn list_battle_log<S: ArenaStore>(store: &S) -> Vec<BattleRound> {
    store
        .read(|state| state.battle_log().list_all().to_vec())
        .await
}

/// Returns the rounds of one battle.
///
/// # Errors
///
/// `Domain` when `battle_identifier` is not a UUID, `NotFound` when no round
/// carries it.
pub async fn get_battle<S: ArenaStore>(
    store: &S,
    battle_identifier: &str,
) -> WorkflowResult<Vec<BattleRound>> {
    let battle_identifier = BattleIdentifier::from_str(battle_identifier)?;

    let rounds: Vec<BattleRound> = store
        .read(move |state| {
            state
                .battle_log()
                .rounds_of(&battle_identifier)
                .cloned()
                .collect()
        })
        .await;

    if rounds.is_empty() {
        return Err(WorkflowError::not_found(
            "Battle",
            battle_identifier.to_string(),
        ));
    }
    Ok(rounds)
}
