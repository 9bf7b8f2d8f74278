//! Domain layer for the dice arena.
//!
//! This crate contains the combatants, the roster that stores them, the
//! append-only battle log and the battle resolver. Everything here is pure:
//! randomness enters only through the [`battle::DiceRoller`] trait.

pub mod arena;
pub mod battle;
pub mod combatant;
pub mod common;
pub mod roster;
