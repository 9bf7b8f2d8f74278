//! Battle resolution and the battle log.
//!
//! ## Types
//!
//! - [`BattleIdentifier`]: UUID shared by every round of one battle
//! - [`DiceValue`] and [`DiceRoller`]: one d6 draw and its source
//! - [`SeededDice`]: a single seeded generator used for a whole battle
//! - [`BattleRound`] and [`Side`]: one recorded round and who won it
//! - [`BattleLog`]: append-only history of every round ever fought
//!
//! ## Resolution
//!
//! [`resolve_battle`] runs the dice loop to completion and returns a
//! [`BattleOutcome`] holding the updated combatants and this battle's rounds.

mod dice;
mod errors;
mod identifier;
mod log;
mod resolver;
mod round;

pub use dice::{DiceRoller, DiceValue, SeededDice};
pub use errors::BattleError;
pub use identifier::BattleIdentifier;
pub use log::BattleLog;
pub use resolver::{BattleOutcome, resolve_battle};
pub use round::{BattleRound, Side};
