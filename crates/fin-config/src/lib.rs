//! # fin-config
//!
//! Layered configuration loading for finapp using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FINAPP_*` prefix, `__` as separator)
//! 2. Project-level `.finapp/config.toml`
//! 3. User-level `~/.config/finapp/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FINAPP_FIREBASE__API_KEY` -> `firebase.api_key`,
//! `FINAPP_AUTH__SESSION_SYNC` -> `auth.session_sync`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fin_config::FinConfig;
//!
//! let config = FinConfig::load_with_dotenv().expect("config");
//! if config.firebase.is_configured() {
//!     println!("Identity Toolkit: {}", config.firebase.auth_endpoint);
//! }
//! ```

mod auth;
mod error;
mod firebase;
mod general;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use fin_core::money::CurrencyFormat;
pub use firebase::FirebaseConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display strings beyond this many fraction digits are not meaningful money.
const MAX_CURRENCY_DECIMALS: usize = 6;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FinConfig {
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FinConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".finapp/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FINAPP_").split("__"))
    }

    /// Reject values that would only fail later, deep inside a command.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimals".into(),
                reason: format!(
                    "{} exceeds the maximum of {MAX_CURRENCY_DECIMALS}",
                    self.currency.decimals
                ),
            });
        }

        if let Err(error) = fin_core::dates::resolve_locale(&self.general.locale) {
            return Err(ConfigError::InvalidValue {
                field: "general.locale".into(),
                reason: error.to_string(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("finapp").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing if
    /// none is found.
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
