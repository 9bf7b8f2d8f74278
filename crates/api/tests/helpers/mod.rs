#![allow(dead_code)]

pub mod assertions;
pub mod client;
pub mod setup;

pub use assertions::*;
pub use client::*;
pub use setup::*;
