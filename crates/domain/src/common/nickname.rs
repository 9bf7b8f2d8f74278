use std::fmt;

use super::errors::ValidationError;

// =============================================================================
// Nickname
// =============================================================================

/// Human-readable key of a player or an enemy.
///
/// Surrounding whitespace is trimmed and the remainder must not be empty.
/// Uniqueness is enforced by the [`Roster`](crate::roster::Roster), separately
/// for each kind of combatant.
///
/// # Examples
///
/// ```
/// use arena_domain::common::Nickname;
///
/// let nickname = Nickname::new("  Hero ").unwrap();
/// assert_eq!(nickname.value(), "Hero");
///
/// assert!(Nickname::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_value("nickname"));
        }

        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
