//! # ver-config
//!
//! Layered configuration loading for Veridian using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERIDIAN_*` prefix, `__` as separator)
//! 2. Bare `GEMINI_API_KEY` / `API_KEY` for the model API key
//! 3. Project-level `.veridian/config.toml`
//! 4. User-level `~/.config/veridian/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERIDIAN_GEMINI__MODEL` -> `gemini.model`,
//! `VERIDIAN_STORE__PATH` -> `store.path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ver_config::VerConfig;
//!
//! let config = VerConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("Model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;
mod store;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use store::{STORE_FILE_NAME, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env vars accepted as the model API key, lowest priority first.
const BARE_API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse or extract,
    /// and `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.gemini.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
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
        let local_path = PathBuf::from(".veridian/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: bare API key variables
        for var in BARE_API_KEY_VARS {
            figment = figment.merge(
                Env::raw()
                    .only(&[var])
                    .map(|_| "gemini.api_key".into()),
            );
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERIDIAN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("veridian").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or falls back to the
    /// current dir. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VerConfig::default();
        assert!(!config.gemini.is_configured());
        assert!(config.store.path.is_empty());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VerConfig = VerConfig::figment().extract()?;
            assert_eq!(config.gemini.model, "gemini-2.5-flash");
            assert_eq!(config.gemini.timeout_secs, 120);
            Ok(())
        });
    }
}
