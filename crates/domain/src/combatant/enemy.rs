use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Combatant;
use crate::common::{Attack, Life, Nickname, RandomSeed};

/// A combatant whose stats are rolled when it is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    nickname: Nickname,
    life: Life,
    attack: Attack,
}

impl Enemy {
    /// Highest life an enemy can spawn with.
    pub const MAX_SPAWN_LIFE: i32 = 10;

    #[must_use]
    pub const fn new(nickname: Nickname, life: Life, attack: Attack) -> Self {
        Self {
            nickname,
            life,
            attack,
        }
    }

    /// Spawns an enemy with life and attack drawn uniformly from `[1, 10]`.
    ///
    /// The same seed always produces the same stats.
    #[must_use]
    pub fn spawn(nickname: Nickname, seed: RandomSeed) -> Self {
        let mut rng = StdRng::seed_from_u64(seed.value());
        let life = Life::new(rng.random_range(Life::MIN_INITIAL..=Self::MAX_SPAWN_LIFE));
        let attack = Attack::roll(&mut rng);
        Self::new(nickname, life, attack)
    }

    #[must_use]
    pub fn with_life(self, life: Life) -> Self {
        Self { life, ..self }
    }

    #[must_use]
    pub fn with_nickname(self, nickname: Nickname) -> Self {
        Self { nickname, ..self }
    }
}

impl Combatant for Enemy {
    fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    fn life(&self) -> Life {
        self.life
    }

    fn attack(&self) -> Attack {
        self.attack
    }
}
