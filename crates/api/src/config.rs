//! Application configuration read from the environment.
//!
//! | Variable          | Default   | Accepted      |
//! |-------------------|-----------|---------------|
//! | `HOST`            | `0.0.0.0` | any           |
//! | `PORT`            | `8080`    | `u16`         |
//! | `MAX_PLAYER_LIFE` | `10`      | `1..=1000`    |
//! | `RNG_SEED`        | unset     | `u64`         |

use arena_domain::combatant::PlayerLimits;
use arena_infrastructure::config::RandomConfig;
use arena_infrastructure::errors::InfraError;
use thiserror::Error;

use crate::server::ServerConfig;

// =============================================================================
// ConfigError
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{variable} has invalid value '{value}': {reason}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Infrastructure(#[from] InfraError),
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub server: ServerConfig,

    pub limits: PlayerLimits,

    pub random: RandomConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| ServerConfig::DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => parse_variable("PORT", &raw)?,
            None => ServerConfig::DEFAULT_PORT,
        };

        let limits = match lookup("MAX_PLAYER_LIFE") {
            Some(raw) => {
                let max_life: i32 = parse_variable("MAX_PLAYER_LIFE", &raw)?;
                PlayerLimits::new(max_life).map_err(|error| ConfigError::InvalidValue {
                    variable: "MAX_PLAYER_LIFE",
                    value: raw,
                    reason: error.message(),
                })?
            }
            None => PlayerLimits::default(),
        };

        let random = RandomConfig::from_lookup(&lookup)?;

        Ok(Self {
            server: ServerConfig::new(host, port),
            limits,
            random,
        })
    }
}

fn parse_variable<T>(variable: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|error: T::Err| ConfigError::InvalidValue {
            variable,
            value: raw.to_string(),
            reason: error.to_string(),
        })
}
