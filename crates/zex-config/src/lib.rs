//! # zex-config
//!
//! Layered configuration loading for zenexport using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ZENEXPORT_*` prefix, `__` as separator)
//! 2. Project-local `zenexport.toml`
//! 3. User-level `~/.config/zenexport/config.toml`
//! 4. Built-in defaults
//!
//! CLI flag overrides are applied by the binary on top of the loaded
//! config, mirroring the flag > env precedence of the original tool.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ZENEXPORT_ZENMONEY__TOKEN` -> `zenmoney.token`,
//! `ZENEXPORT_SYNC__INTERVAL_MINUTES` -> `sync.interval_minutes`, etc.
//! The `__` (double underscore) separates nested config sections.

mod error;
mod lake;
mod sync;
mod zenmoney;

pub use error::ConfigError;
pub use lake::LakeConfig;
pub use sync::SyncConfig;
pub use zenmoney::ZenMoneyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZexConfig {
    #[serde(default)]
    pub zenmoney: ZenMoneyConfig,
    #[serde(default)]
    pub lake: LakeConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl ZexConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`ZexConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails (e.g. a value of
    /// the wrong type in a TOML file or env var).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads a `.env` file from the current directory (if present) before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("zenexport.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ZENEXPORT_").split("__"))
    }

    /// Validate that every section holds the minimum required values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the ZenMoney token is
    /// missing, or [`ConfigError::InvalidValue`] for an empty lake path or a
    /// zero sync interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zenmoney.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "zenmoney".to_string(),
            });
        }
        self.lake.validate()?;
        self.sync.validate()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zenexport").join("config.toml"))
    }
}
