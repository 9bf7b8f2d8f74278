use arena_domain::combatant::Player;
use arena_domain::common::Nickname;

use crate::errors::WorkflowError;
use crate::ports::{ArenaStore, WorkflowResult};

/// Returns every registered player in registration order.
pub async fn list_players<S: ArenaStore>(store: &S) -> Vec<Player> {
    store.read(|state| state.roster().players().to_vec()).await
}

/// Looks a player up by nickname.
///
/// # Errors
///
/// `Domain` for a blank nickname, `NotFound` when no player has it.
pub async fn get_player<S: ArenaStore>(store: &S, nickname: &str) -> WorkflowResult<Player> {
    let nickname = Nickname::new(nickname)?;

    store
        .read(move |state| {
            state
                .roster()
                .find_player(&nickname)
                .cloned()
                .ok_or_else(|| WorkflowError::not_found("Player", nickname.value()))
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::testing::MockArenaStore;
    use crate::workflows::player::{RegisterPlayerCommand, register_player};
    use arena_domain::combatant::{Combatant, PlayerLimits};
    use rstest::rstest;

    async fn seeded_store(nicknames: &[&str]) -> MockArenaStore {
        let store = MockArenaStore::default();
        for nickname in nicknames {
            let command = RegisterPlayerCommand::new((*nickname).to_string(), 10, 5);
            register_player(&store, &PlayerLimits::default(), command)
                .await
                .unwrap();
        }
        store
    }

    #[rstest]
    #[tokio::test]
    async fn list_keeps_registration_order() {
        let store = seeded_store(&["Zed", "Amy", "Bob"]).await;

        let nicknames: Vec<String> = list_players(&store)
            .await
            .into_iter()
            .map(|player| player.nickname().value().to_string())
            .collect();

        assert_eq!(nicknames, vec!["Zed", "Amy", "Bob"]);
    }

    #[rstest]
    #[tokio::test]
    async fn list_of_empty_store_is_empty() {
        assert!(list_players(&MockArenaStore::default()).await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn get_finds_registered_player() {
        let store = seeded_store(&["Hero"]).await;

        let player = get_player(&store, "Hero").await.unwrap();

        assert_eq!(player.nickname().value(), "Hero");
    }

    #[rstest]
    #[tokio::test]
    async fn get_unknown_player_is_not_found() {
        let store = seeded_store(&["Hero"]).await;

        let result = get_player(&store, "Villain").await;

        assert_eq!(result, Err(WorkflowError::not_found("Player", "Villain")));
    }
}
