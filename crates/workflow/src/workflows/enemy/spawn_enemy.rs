use arena_domain::combatant::Enemy;
use arena_domain::common::Nickname;

use super::SpawnEnemyCommand;
use crate::ports::{ArenaStore, RandomGenerator, WorkflowResult};

// =============================================================================
// SpawnEnemy Workflow
// =============================================================================

/// Creates an enemy whose life and attack are drawn from `[1, 10]`.
///
/// # Errors
///
/// `Domain` for a blank nickname, `Conflict` when another enemy has it.
pub async fn spawn_enemy<S, R>(
    store: &S,
    random: &R,
    command: SpawnEnemyCommand,
) -> WorkflowResult<Enemy>
where
    S: ArenaStore,
    R: RandomGenerator,
{
    let nickname = Nickname::new(command.nickname())?;
    let enemy = Enemy::spawn(nickname, random.generate_seed());

    store
        .write(move |state| {
            state
                .roster_mut()
                .add_enemy(enemy)
                .cloned()
                .map_err(Into::into)
        })
        .await
}

// =============================================================================
// Tests
// =============================================================================
