//! Environment-driven configuration for the infrastructure adapters.

use crate::errors::InfraError;

// =============================================================================
// RandomConfig
// =============================================================================

/// Selects the seed source.
///
/// When `seed` is set every run of the service produces the same enemies and
/// battles for the same sequence of requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Environment variable holding the optional base seed.
    pub const SEED_VARIABLE: &'static str = "RNG_SEED";

    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Reads `RNG_SEED` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] when the variable is set but is
    /// not an unsigned 64-bit integer.
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] for an unparsable seed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(Self::SEED_VARIABLE) else {
            return Ok(Self::default());
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        raw.parse::<u64>().map(Self::with_seed).map_err(|error| {
            InfraError::configuration(format!(
                "{} must be an unsigned integer, got '{}': {}",
                Self::SEED_VARIABLE,
                raw,
                error
            ))
        })
    }
}
