//! Seed source adapters.
//!
//! This module provides implementations of the [`RandomGenerator`] port:
//!
//! - [`SystemRandomGenerator`]: OS-seeded seeds for production use
//! - [`DeterministicRandomGenerator`]: A counter, for tests and replays
//! - [`ConfiguredRandomGenerator`]: Whichever of the two the config selects
//!
//! # Examples
//!
//! ```
//! use arena_infrastructure::adapters::DeterministicRandomGenerator;
//! use arena_workflow::ports::RandomGenerator;
//!
//! let generator = DeterministicRandomGenerator::new(42);
//! assert_eq!(generator.generate_seed().value(), 42);
//! assert_eq!(generator.generate_seed().value(), 43);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arena_domain::common::RandomSeed;
use arena_workflow::ports::RandomGenerator;
use rand::Rng;

use crate::config::RandomConfig;

// =============================================================================
// SystemRandomGenerator
// =============================================================================

/// Draws each seed from the thread-local generator, which is seeded from OS
/// entropy.
#[derive(Clone, Debug, Default)]
pub struct SystemRandomGenerator;

impl SystemRandomGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomGenerator for SystemRandomGenerator {
    fn generate_seed(&self) -> RandomSeed {
        RandomSeed::new(rand::rng().random::<u64>())
    }
}

// =============================================================================
// DeterministicRandomGenerator
// =============================================================================

/// Hands out `initial`, `initial + 1`, ... as seeds.
///
/// Clones share the counter, so every handler of one server sees a single
/// sequence.
#[derive(Clone, Debug)]
pub struct DeterministicRandomGenerator {
    counter: Arc<AtomicU64>,
}

impl DeterministicRandomGenerator {
    #[must_use]
    pub fn new(initial: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(initial)),
        }
    }
}

impl RandomGenerator for DeterministicRandomGenerator {
    fn generate_seed(&self) -> RandomSeed {
        RandomSeed::new(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

// =============================================================================
// ConfiguredRandomGenerator
// =============================================================================

#[derive(Clone, Debug)]
pub enum ConfiguredRandomGenerator {
    System(SystemRandomGenerator),
    Deterministic(DeterministicRandomGenerator),
}

impl ConfiguredRandomGenerator {
    #[must_use]
    pub fn from_config(config: &RandomConfig) -> Self {
        match config.seed {
            Some(seed) => {
                tracing::info!(seed, "Using deterministic seeds");
                Self::Deterministic(DeterministicRandomGenerator::new(seed))
            }
            None => Self::System(SystemRandomGenerator::new()),
        }
    }
}

impl RandomGenerator for ConfiguredRandomGenerator {
    fn generate_seed(&self) -> RandomSeed {
        match self {
            Self::System(generator) => generator.generate_seed(),
            Self::Deterministic(generator) => generator.generate_seed(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
