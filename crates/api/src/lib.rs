//! HTTP surface of the dice arena.
//!
//! Handlers decode JSON, call the workflows and map their results and
//! errors back onto HTTP. The `arena-server` binary wires these pieces to
//! the in-memory store.

pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
