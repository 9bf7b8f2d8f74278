//! Error types shared by every arena subdomain.

use std::error::Error;
use std::fmt;

use crate::battle::BattleError;
use crate::roster::RosterError;

// =============================================================================
// ValidationError
// =============================================================================

/// Validation failures raised while constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    EmptyValue {
        /// The name of the field that was empty.
        field: String,
    },
    /// A value was outside the valid range.
    OutOfRange {
        field: String,
        min: String,
        max: String,
        actual: String,
    },
    /// A value had an invalid format.
    InvalidFormat {
        field: String,
        /// Description of the expected format.
        expected: String,
    },
}

impl ValidationError {
    /// Returns the name of the field that caused the error.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::EmptyValue { field } => format!("'{}' must not be empty", field),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => format!(
                "'{}' must be between {} and {}, but was {}",
                field, min, max, actual
            ),
            Self::InvalidFormat { field, expected } => {
                format!("'{}' has invalid format: expected {}", field, expected)
            }
        }
    }

    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }

    pub fn out_of_range(
        field: impl Into<String>,
        min: impl ToString,
        max: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min: min.to_string(),
            max: max.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for ValidationError {}

// =============================================================================
// DomainError
// =============================================================================

/// Unified error type for the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    Validation(ValidationError),
    Roster(RosterError),
    Battle(BattleError),
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => write!(formatter, "Validation error: {}", error),
            Self::Roster(error) => write!(formatter, "Roster error: {}", error),
            Self::Battle(error) => write!(formatter, "Battle error: {}", error),
        }
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Roster(error) => Some(error),
            Self::Battle(error) => Some(error),
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<RosterError> for DomainError {
    fn from(error: RosterError) -> Self {
        Self::Roster(error)
    }
}

impl From<BattleError> for DomainError {
    fn from(error: BattleError) -> Self {
        Self::Battle(error)
    }
}

// =============================================================================
// Tests
// =============================================================================
