//! Infrastructure error types.
//!
//! # Error Categories
//!
//! - [`InfraError::Configuration`]: An environment setting could not be used
//!
//! # Examples
//!
//! ```
//! use arena_infrastructure::errors::InfraError;
//!
//! let error = InfraError::configuration("RNG_SEED must be an unsigned integer");
//! assert!(error.is_configuration());
//! ```

use thiserror::Error;

// =============================================================================
// InfraError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfraError {
    /// A configuration error occurred.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message.
        message: String,
    },
}

impl InfraError {
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
