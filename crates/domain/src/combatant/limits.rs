use crate::common::ValidationError;

/// Creation bounds for player stats.
///
/// Attack is always `1..=10`; the life ceiling is configurable because some
/// deployments let players start with up to 100 life. The ceiling itself is
/// capped at [`MAX_CEILING`](Self::MAX_CEILING), which bounds the number of
/// rounds a single battle can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLimits {
    max_life: i32,
}

impl PlayerLimits {
    pub const DEFAULT_MAX_LIFE: i32 = 10;
    pub const MAX_CEILING: i32 = 1000;

    pub fn new(max_life: i32) -> Result<Self, ValidationError> {
        if !(1..=Self::MAX_CEILING).contains(&max_life) {
            return Err(ValidationError::out_of_range(
                "max_player_life",
                1,
                Self::MAX_CEILING,
                max_life,
            ));
        }
        Ok(Self { max_life })
    }

    #[must_use]
    pub const fn max_life(&self) -> i32 {
        self.max_life
    }
}

impl Default for PlayerLimits {
    fn default() -> Self {
        Self {
            max_life: Self::DEFAULT_MAX_LIFE,
        }
    }
}
