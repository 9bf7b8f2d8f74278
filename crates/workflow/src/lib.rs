//! Workflow layer for the dice arena
//!
//! This crate defines the application use cases: registering combatants,
//! renaming and removing them, and starting battles. It depends only on
//! abstract ports (traits) and contains no concrete IO.

pub mod errors;
pub mod ports;
pub mod workflows;
