use super::{Combatant, PlayerLimits};
use crate::common::{Attack, Life, Nickname, ValidationError};

/// A caller-controlled combatant.
///
/// # Examples
///
/// ```
/// use arena_domain::combatant::{Combatant, Player, PlayerLimits};
/// use arena_domain::common::Nickname;
///
/// let nickname = Nickname::new("Hero").unwrap();
/// let player = Player::register(nickname, 10, 5, &PlayerLimits::default()).unwrap();
/// assert_eq!(player.life().value(), 10);
///
/// let nickname = Nickname::new("Hero").unwrap();
/// assert!(Player::register(nickname, 11, 5, &PlayerLimits::default()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    nickname: Nickname,
    life: Life,
    attack: Attack,
}

impl Player {
    #[must_use]
    pub const fn new(nickname: Nickname, life: Life, attack: Attack) -> Self {
        Self {
            nickname,
            life,
            attack,
        }
    }

    /// Validates caller-supplied stats and builds a fresh player.
    ///
    /// Attack is checked before life.
    pub fn register(
        nickname: Nickname,
        life: i32,
        attack: i32,
        limits: &PlayerLimits,
    ) -> Result<Self, ValidationError> {
        let attack = Attack::new(attack)?;
        let life = Life::initial(life, limits.max_life())?;
        Ok(Self::new(nickname, life, attack))
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

impl Combatant for Player {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nickname() -> Nickname {
        Nickname::new("Hero").unwrap()
    }

    #[rstest]
    fn register_keeps_supplied_stats() {
        let player = Player::register(nickname(), 7, 3, &PlayerLimits::default()).unwrap();

        assert_eq!(player.nickname().value(), "Hero");
        assert_eq!(player.life(), Life::new(7));
        assert_eq!(player.attack().value(), 3);
    }

    #[rstest]
    #[case(10, 0, "attack")]
    #[case(10, 11, "attack")]
    #[case(0, 5, "life")]
    #[case(11, 5, "life")]
    #[case(0, 0, "attack")]
    fn register_rejects_out_of_range_stats(
        #[case] life: i32,
        #[case] attack: i32,
        #[case] field: &str,
    ) {
        let error = Player::register(nickname(), life, attack, &PlayerLimits::default())
            .unwrap_err();
        assert_eq!(error.field(), field);
    }

    #[rstest]
    fn register_honours_raised_life_ceiling() {
        let limits = PlayerLimits::new(100).unwrap();
        let player = Player::register(nickname(), 100, 10, &limits).unwrap();
        assert_eq!(player.life().value(), 100);
    }

    #[rstest]
    fn with_life_and_with_nickname_replace_single_field() {
        let player = Player::register(nickname(), 7, 3, &PlayerLimits::default()).unwrap();

        let renamed = player
            .clone()
            .with_nickname(Nickname::new("Champion").unwrap());
        let wounded = player.with_life(Life::new(-2));

        assert_eq!(renamed.nickname().value(), "Champion");
        assert_eq!(renamed.life().value(), 7);
        assert_eq!(wounded.life().value(), -2);
        assert!(!wounded.is_alive());
    }
}
