//! Error types for the workflow layer.
//!
//! Domain errors that callers need to tell apart are lifted into dedicated
//! variants here, so the outer layers can map them without digging into the
//! domain error tree.
//!
//! # Error Categories
//!
//! - [`WorkflowError::Domain`]: Input that failed domain validation
//! - [`WorkflowError::NotFound`]: A combatant or battle that does not exist
//! - [`WorkflowError::Conflict`]: A nickname that is already taken
//! - [`WorkflowError::InvalidState`]: An operation the current state forbids
//!
//! # Examples
//!
//! ```
//! use arena_workflow::errors::WorkflowError;
//!
//! let error = WorkflowError::not_found("Enemy", "Goblin");
//! assert!(error.is_not_found());
//! assert_eq!(error.to_string(), "Enemy 'Goblin' not found");
//! ```

use arena_domain::battle::BattleError;
use arena_domain::common::{DomainError, ValidationError};
use arena_domain::roster::RosterError;
use std::error::Error;
use std::fmt;

// =============================================================================
// WorkflowError
// =============================================================================

/// Error types for workflow operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// A domain error occurred during workflow execution.
    Domain(DomainError),

    /// The requested entity was not found.
    NotFound {
        /// The type of entity that was not found (e.g., "Player", "Battle").
        entity_type: String,
        /// The identifier used to look up the entity.
        identifier: String,
    },

    /// A uniqueness rule would be broken.
    Conflict {
        /// The reason for the conflict.
        reason: String,
    },

    /// The entities exist but are not in a state that allows the operation.
    InvalidState {
        /// The reason the operation was refused.
        reason: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl WorkflowError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a new `Conflict` error.
    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    /// Creates a new `InvalidState` error.
    #[must_use]
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

// =============================================================================
// Display and Error Implementations
// =============================================================================

impl fmt::Display for WorkflowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(error) => write!(formatter, "{}", error),
            Self::NotFound {
                entity_type,
                identifier,
            } => write!(formatter, "{} '{}' not found", entity_type, identifier),
            Self::Conflict { reason } => write!(formatter, "Conflict: {}", reason),
            Self::InvalidState { reason } => write!(formatter, "Invalid state: {}", reason),
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(error) => Some(error),
            _ => None,
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<RosterError> for WorkflowError {
    fn from(error: RosterError) -> Self {
        if error.is_not_found() {
            Self::not_found(error.entity_type(), error.nickname())
        } else {
            Self::conflict(error.message())
        }
    }
}

impl From<BattleError> for WorkflowError {
    fn from(error: BattleError) -> Self {
        Self::invalid_state(error.message())
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(error: ValidationError) -> Self {
        Self::Domain(DomainError::Validation(error))
    }
}

impl From<DomainError> for WorkflowError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Roster(error) => error.into(),
            DomainError::Battle(error) => error.into(),
            DomainError::Validation(_) => Self::Domain(error),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
