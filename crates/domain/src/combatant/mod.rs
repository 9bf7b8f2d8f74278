//! Players and enemies.
//!
//! Both kinds share the same shape (nickname, life, attack) and differ only in
//! how their stats are chosen: players bring their own within
//! [`PlayerLimits`], enemies roll theirs from a [`RandomSeed`].
//!
//! [`RandomSeed`]: crate::common::RandomSeed

mod enemy;
mod limits;
mod player;

pub use enemy::Enemy;
pub use limits::PlayerLimits;
pub use player::Player;

use crate::common::{Attack, Life, Nickname};

/// Read access shared by both kinds of combatant.
pub trait Combatant {
    fn nickname(&self) -> &Nickname;

    fn life(&self) -> Life;

    fn attack(&self) -> Attack;

    fn is_alive(&self) -> bool {
        self.life().is_alive()
    }
}
