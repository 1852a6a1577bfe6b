//! Server configuration read from the environment.

use chrono::{DateTime, Utc};

use crate::server::error::config::ConfigError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Contact address published in the OpenAPI document (`CONTACT_EMAIL`).
    pub contact_email: String,
    /// Instant fixture timestamps are computed from (`FIXTURE_ANCHOR`, RFC 3339).
    ///
    /// When unset, fixtures are stamped relative to the time of each request.
    pub fixture_anchor: Option<DateTime<Utc>>,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `CONTACT_EMAIL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `FIXTURE_ANCHOR` is not an RFC 3339 timestamp
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable
    /// when it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contact_email = lookup("CONTACT_EMAIL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("CONTACT_EMAIL".to_string()))?;

        let fixture_anchor = match lookup("FIXTURE_ANCHOR").filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(
                DateTime::parse_from_rfc3339(value.trim())
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "FIXTURE_ANCHOR".to_string(),
                        reason: e.to_string(),
                    })?
                    .with_timezone(&Utc),
            ),
            None => None,
        };

        Ok(Self {
            contact_email,
            fixture_anchor,
        })
    }
}
