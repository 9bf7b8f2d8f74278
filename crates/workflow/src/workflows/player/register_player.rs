use arena_domain::combatant::{Player, PlayerLimits};
use arena_domain::common::Nickname;

use super::RegisterPlayerCommand;
use crate::ports::{ArenaStore, WorkflowResult};

// =============================================================================
// Step 1: Build Player [Pure]
// =============================================================================

fn build_player(command: &RegisterPlayerCommand, limits: &PlayerLimits) -> WorkflowResult<Player> {
    let nickname = Nickname::new(command.nickname())?;
    Ok(Player::register(
        nickname,
        command.life(),
        command.attack(),
        limits,
    )?)
}

// =============================================================================
// RegisterPlayer Workflow
// =============================================================================

/// Registers a player with caller-supplied stats.
///
/// # Errors
///
/// - `Domain` when the nickname is blank, attack is outside `[1, 10]` or life
///   is outside `[1, limits.max_life()]`
/// - `Conflict` when another player already uses the nickname
pub async fn register_player<S: ArenaStore>(
    store: &S,
    limits: &PlayerLimits,
    command: RegisterPlayerCommand,
) -> WorkflowResult<Player> {
    let player = build_player(&command, limits)?;

    store
        .write(move |state| {
            state
                .roster_mut()
                .add_player(player)
                .cloned()
                .map_err(Into::into)
        })
        .await
}

// =============================================================================
// Tests
// =============================================================================
