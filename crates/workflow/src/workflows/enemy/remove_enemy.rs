use arena_domain::combatant::Enemy;
use arena_domain::common::Nickname;

use crate::ports::{ArenaStore, WorkflowResult};

/// Removes an enemy and returns it. The battle log is left untouched.
///
/// # Errors
///
/// `Domain` for a blank nickname, `NotFound` when no enemy has it.
pub async fn remove_enemy<S: ArenaStore>(store: &S, nickname: &str) -> WorkflowResult<Enemy> {
    let nickname = Nickname::new(nickname)?;

    store
        .write(move |state| {
            state
                .roster_mut()
                .remove_enemy(&nickname)
                .map_err(Into::into)
        })
        .await
}
