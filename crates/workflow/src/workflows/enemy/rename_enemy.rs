use arena_domain::combatant::Enemy;
use arena_domain::common::Nickname;

use super::RenameEnemyCommand;
use crate::ports::{ArenaStore, WorkflowResult};

/// Changes an enemy's nickname, keeping its rolled stats.
///
/// # Errors
///
/// - `Domain` when either nickname is blank
/// - `NotFound` when no enemy has the current nickname
/// - `Conflict` when the new nickname is taken, including by this enemy
pub async fn rename_enemy<S: ArenaStore>(
    store: &S,
    command: RenameEnemyCommand,
) -> WorkflowResult<Enemy> {
    let current = Nickname::new(command.current_nickname())?;
    let renamed = Nickname::new(command.new_nickname())?;

    store
        .write(move |state| {
            state
                .roster_mut()
                .rename_enemy(&current, renamed)
                .cloned()
                .map_err(Into::into)
        })
        .await
}
