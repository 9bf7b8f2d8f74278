pub mod in_memory;
pub mod random;

pub use in_memory::InMemoryArenaStore;
pub use random::{ConfiguredRandomGenerator, DeterministicRandomGenerator, SystemRandomGenerator};
