//! Firebase Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Identity Toolkit v1 base URL.
fn default_auth_endpoint() -> String {
    String::from("https://identitytoolkit.googleapis.com/v1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirebaseConfig {
    /// Web API key of the Firebase project.
    #[serde(default)]
    pub api_key: String,

    /// Identity Toolkit base URL. Point at the emulator
    /// (`http://localhost:9099/identitytoolkit.googleapis.com/v1`) for local runs.
    #[serde(default = "default_auth_endpoint")]
    pub auth_endpoint: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_endpoint: default_auth_endpoint(),
        }
    }
}

impl FirebaseConfig {
    /// Check if the Firebase config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.auth_endpoint.is_empty()
    }

    /// Fail with `NotConfigured` unless the section is usable.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "firebase".into(),
            })
        }
    }
}
