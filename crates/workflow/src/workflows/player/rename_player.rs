use arena_domain::combatant::Player;
use arena_domain::common::Nickname;

use super::RenamePlayerCommand;
use crate::ports::{ArenaStore, WorkflowResult};

/// Changes a player's nickname, keeping life and attack.
///
/// Rounds already in the battle log keep the old nickname.
///
/// # Errors
///
/// - `Domain` when either nickname is blank
/// - `NotFound` when no player has the current nickname
/// - `Conflict` when the new nickname is taken, including by this player
pub async fn rename_player<S: ArenaStore>(
    store: &S,
    command: RenamePlayerCommand,
) -> WorkflowResult<Player> {
    let current = Nickname::new(command.current_nickname())?;
    let renamed = Nickname::new(command.new_nickname())?;

    store
        .write(move |state| {
            state
                .roster_mut()
                .rename_player(&current, renamed)
                .cloned()
                .map_err(Into::into)
        })
        .await
}
