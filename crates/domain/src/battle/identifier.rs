use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::common::ValidationError;

/// Unique identifier of one battle invocation.
///
/// # Examples
///
/// ```
/// use arena_domain::battle::BattleIdentifier;
///
/// let identifier = BattleIdentifier::new();
/// let parsed: BattleIdentifier = identifier.to_string().parse().unwrap();
/// assert_eq!(identifier, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BattleIdentifier(Uuid);

impl BattleIdentifier {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BattleIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BattleIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for BattleIdentifier {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(string)
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("battle_id", "valid UUID format"))
    }
}

impl From<Uuid> for BattleIdentifier {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}
