use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{RandomSeed, ValidationError};

// =============================================================================
// DiceValue
// =============================================================================

/// Face of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceValue(u8);

impl DiceValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Highest face that hands the round to the enemy.
    pub const ENEMY_THRESHOLD: u8 = 3;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "dice_value",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for 1 to 3, the faces won by the enemy.
    #[must_use]
    pub const fn favours_enemy(&self) -> bool {
        self.0 <= Self::ENEMY_THRESHOLD
    }
}

impl fmt::Display for DiceValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// DiceRoller
// =============================================================================

/// Source of die rolls for one battle.
pub trait DiceRoller {
    fn roll(&mut self) -> DiceValue;
}

// =============================================================================
// SeededDice
// =============================================================================

/// A die backed by one [`StdRng`], seeded once and never reseeded.
///
/// # Examples
///
/// ```
/// use arena_domain::battle::{DiceRoller, SeededDice};
/// use arena_domain::common::RandomSeed;
///
/// let mut first = SeededDice::from_seed(RandomSeed::new(7));
/// let mut second = SeededDice::from_seed(RandomSeed::new(7));
/// assert_eq!(first.roll(), second.roll());
/// ```
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    #[must_use]
    pub fn from_seed(seed: RandomSeed) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed.value()),
        }
    }
}

impl DiceRoller for SeededDice {
    fn roll(&mut self) -> DiceValue {
        DiceValue(self.rng.random_range(DiceValue::MIN..=DiceValue::MAX))
    }
}
