use arena_domain::combatant::Enemy;
use arena_domain::common::Nickname;

use crate::errors::WorkflowError;
use crate::ports::{ArenaStore, WorkflowResult};

/// Returns every enemy in spawn order.
pub async fn list_enemies<S: ArenaStore>(store: &S) -> Vec<Enemy> {
    store.read(|state| state.roster().enemies().to_vec()).await
}

/// Looks an enemy up by nickname.
///
/// # Errors
///
/// `Domain` for a blank nickname, `NotFound` when no enemy has it.
pub async fn get_enemy<S: ArenaStore>(store: &S, nickname: &str) -> WorkflowResult<Enemy> {
    let nickname = Nickname::new(nickname)?;

    store
        .read(move |state| {
            state
                .roster()
                .find_enemy(&nickname)
                .cloned()
                .ok_or_else(|| WorkflowError::not_found("Enemy", nickname.value()))
        })
        .await
}
