//! Workflow implementations.
//!
//! Each workflow validates its input first, then touches the store exactly
//! once. Checks and mutations that must not interleave with other requests
//! run inside a single [`ArenaStore::write`](crate::ports::ArenaStore::write).
//!
//! # Modules
//!
//! - [`player`]: Player registration and management
//! - [`enemy`]: Enemy spawning and management
//! - [`battle`]: Battles and the battle log

pub mod battle;
pub mod enemy;
pub mod player;
