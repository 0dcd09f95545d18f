//! # lexis-config
//!
//! Layered configuration loading for Lexis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXIS_*` prefix, `__` as separator)
//! 2. Project-level `.lexis/config.toml`
//! 3. User-level `~/.config/lexis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXIS_DATA__TERMS` -> `data.terms`, `LEXIS_DAILY__FACT_OFFSET`
//! -> `daily.fact_offset`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lexis_config::LexisConfig;
//!
//! let config = LexisConfig::load_with_dotenv().expect("config");
//! println!("terms from {}", config.data.terms);
//! ```

mod daily;
mod data;
mod error;
mod general;

pub use daily::DailyConfig;
pub use data::DataConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LEXIS_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LexisConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub daily: DailyConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LexisConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lexis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would leave the loader with nothing to read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.data.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexis").join("config.toml"))
    }

    /// Where the preference store lives: the configured path, or
    /// `<config_dir>/lexis/preferences.json`.
    #[must_use]
    pub fn preferences_path(&self) -> Option<PathBuf> {
        if let Some(path) = self.general.preferences_path.as_deref().filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|p| p.join("lexis").join("preferences.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LexisConfig::default();
        assert_eq!(config.data.terms, "data/words.json");
        assert_eq!(config.data.facts, "data/facts.json");
        assert_eq!(config.daily.word_offset, 0);
        assert_eq!(config.daily.fact_offset, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LexisConfig = LexisConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 0);
            Ok(())
        });
    }

    #[test]
    fn explicit_preferences_path_wins() {
        let mut config = LexisConfig::default();
        config.general.preferences_path = Some("/tmp/prefs.json".into());
        assert_eq!(config.preferences_path(), Some(PathBuf::from("/tmp/prefs.json")));
    }
}
