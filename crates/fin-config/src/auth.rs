//! Session and sign-in behaviour.

use std::path::PathBuf;
use std::time::Duration;

use fin_core::enums::SessionSync;
use serde::{Deserialize, Serialize};

/// How long the OAuth redirect listener waits for the browser.
const fn default_oauth_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Whether provider connection changes also write the local session.
    #[serde(default)]
    pub session_sync: SessionSync,

    #[serde(default = "default_oauth_timeout_secs")]
    pub oauth_timeout_secs: u64,

    /// Where the signed-in identity is kept between runs.
    /// Defaults to `~/.config/finapp/session.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_sync: SessionSync::default(),
            oauth_timeout_secs: default_oauth_timeout_secs(),
            session_file: None,
        }
    }
}

impl AuthConfig {
    pub const fn oauth_timeout(&self) -> Duration {
        Duration::from_secs(self.oauth_timeout_secs)
    }

    /// Configured session file, else the user config directory's.
    /// `None` only when no config directory can be found.
    #[must_use]
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session_file
            .clone()
            .or_else(|| dirs::config_dir().map(|p| p.join("finapp").join("session.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert_eq!(config.session_sync, SessionSync::Explicit);
        assert_eq!(config.oauth_timeout(), Duration::from_secs(120));
        assert_eq!(config.session_file, None);
    }

    #[test]
    fn session_path_prefers_configured_file() {
        let config = AuthConfig {
            session_file: Some(PathBuf::from("/tmp/fin-session.json")),
            ..AuthConfig::default()
        };
        assert_eq!(config.session_path(), Some(PathBuf::from("/tmp/fin-session.json")));

        if let Some(default) = AuthConfig::default().session_path() {
            assert!(default.ends_with("finapp/session.json"));
        }
    }
}
