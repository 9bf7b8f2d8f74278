//! Numeric value objects for combat.

use std::fmt;

use rand::Rng;

use super::errors::ValidationError;

// =============================================================================
// Life
// =============================================================================

/// Remaining life of a combatant.
///
/// Life is only bounded when a combatant is created. During a battle it may
/// drop below zero and is stored that way; nothing clamps it.
///
/// # Examples
///
/// ```
/// use arena_domain::common::{Attack, Life};
///
/// let life = Life::new(3);
/// let wounded = life.take_hit(Attack::new(5).unwrap());
/// assert_eq!(wounded.value(), -2);
/// assert!(!wounded.is_alive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Life(i32);

impl Life {
    /// Smallest life a combatant can be created with.
    pub const MIN_INITIAL: i32 = 1;

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Creates the starting life of a combatant, bounded by `1..=max`.
    pub fn initial(value: i32, max: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN_INITIAL..=max).contains(&value) {
            return Err(ValidationError::out_of_range(
                "life",
                Self::MIN_INITIAL,
                max,
                value,
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns true while the combatant can still fight.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the life left after taking one hit of `attack`.
    #[must_use]
    pub const fn take_hit(&self, attack: Attack) -> Self {
        Self(self.0.saturating_sub(attack.value()))
    }
}

impl fmt::Display for Life {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Attack
// =============================================================================

/// Damage dealt by a combatant each round it wins.
///
/// Attack is constrained to `MIN..=MAX` (1 to 10) for every combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attack(i32);

impl Attack {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "attack",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Draws an attack uniformly from `MIN..=MAX`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN..=Self::MAX))
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
