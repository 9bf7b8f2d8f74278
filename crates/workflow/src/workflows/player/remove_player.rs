use arena_domain::combatant::Player;
use arena_domain::common::Nickname;

use crate::ports::{ArenaStore, WorkflowResult};

/// Removes a player and returns it. The battle log is left untouched.
///
/// # Errors
///
/// `Domain` for a blank nickname, `NotFound` when no player has it.
pub async fn remove_player<S: ArenaStore>(store: &S, nickname: &str) -> WorkflowResult<Player> {
    let nickname = Nickname::new(nickname)?;

    store
        .write(move |state| {
            state
                .roster_mut()
                .remove_player(&nickname)
                .map_err(Into::into)
        })
        .await
}
