use std::fmt;

/// Seed for one reproducible stream of random draws.
///
/// A seed is drawn once per battle (or per spawned enemy) and fed into a
/// single generator; draws within that scope never reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomSeed(u64);

impl RandomSeed {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RandomSeed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<u64> for RandomSeed {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
