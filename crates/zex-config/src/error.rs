//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge failed (bad TOML, mistyped env var).
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section is missing required fields (e.g. no ZenMoney token
    /// anywhere in the chain).
    #[error("configuration section '{section}' is missing required fields")]
    NotConfigured { section: String },

    /// A field is present but holds an unusable value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
