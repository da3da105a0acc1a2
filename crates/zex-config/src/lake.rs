//! Destination store configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default DuckDB database path, relative to the working directory.
fn default_path() -> String {
    "zenexport.duckdb".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LakeConfig {
    /// Path of the DuckDB database file. Created on first run.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for LakeConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl LakeConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lake.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
