//! Infrastructure layer for the dice arena
//!
//! This crate provides concrete implementations of the ports defined in the
//! workflow layer: the in-process arena store and the seed sources, plus the
//! configuration that selects between them.

pub mod adapters;
pub mod config;
pub mod errors;
