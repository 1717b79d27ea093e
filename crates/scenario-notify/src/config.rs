//! Construction-time configuration for the reporting adapter.
//!
//! The only setting is strictness. It can be given explicitly or read from
//! `SCENARIO_NOTIFY_STRICT`, and never changes once an adapter is built.

use std::env;

use crate::error::ConfigError;

/// Environment variable enabling strict mode.
pub const STRICT_ENV_VAR: &str = "SCENARIO_NOTIFY_STRICT";

const TRUE_SPELLINGS: [&str; 4] = ["1", "true", "yes", "on"];
const FALSE_SPELLINGS: [&str; 4] = ["0", "false", "no", "off"];

/// Reads a boolean switch, ignoring ASCII case and surrounding whitespace.
fn parse_env_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    [(TRUE_SPELLINGS, true), (FALSE_SPELLINGS, false)]
        .into_iter()
        .find_map(|(spellings, flag)| {
            spellings
                .iter()
                .any(|spelling| spelling.eq_ignore_ascii_case(value))
                .then_some(flag)
        })
}

/// Adapter configuration.
///
/// # Examples
///
/// ```
/// use scenario_notify::AdapterConfig;
///
/// assert!(!AdapterConfig::default().strict);
/// assert!(AdapterConfig::strict().strict);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Report pending and undefined steps as failures.
    pub strict: bool,
}

impl AdapterConfig {
    /// Configuration for strict runs.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Load configuration from the process environment.
    ///
    /// Reads [`STRICT_ENV_VAR`]; an unset variable means non-strict.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] when the variable holds a value
    /// that is not a recognised boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps variable names to
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] when the strictness value is not a
    /// recognised boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_notify::AdapterConfig;
    ///
    /// let config = AdapterConfig::from_lookup(|_| Some("yes".to_string()));
    /// assert_eq!(config, Ok(AdapterConfig::strict()));
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let strict = lookup(STRICT_ENV_VAR)
            .map(|value| {
                parse_env_bool(&value).ok_or(ConfigError::InvalidBool {
                    variable: STRICT_ENV_VAR,
                    value,
                })
            })
            .transpose()?
            .unwrap_or(false);
        Ok(Self { strict })
    }
}
