use super::{BattleIdentifier, BattleRound};

/// Append-only history of every round fought in the process.
///
/// Insertion order is the canonical round order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleLog {
    rounds: Vec<BattleRound>,
}

impl BattleLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, rounds: impl IntoIterator<Item = BattleRound>) {
        self.rounds.extend(rounds);
    }

    #[must_use]
    pub fn list_all(&self) -> &[BattleRound] {
        &self.rounds
    }

    /// Rounds of one battle, in the order they were fought.
    pub fn rounds_of<'a>(
        &'a self,
        battle_identifier: &'a BattleIdentifier,
    ) -> impl Iterator<Item = &'a BattleRound> + 'a {
        self.rounds
            .iter()
            .filter(move |round| round.battle_identifier() == battle_identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
