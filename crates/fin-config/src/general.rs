//! General application configuration.

use serde::{Deserialize, Serialize};

/// The app ships in Spanish first.
fn default_locale() -> String {
    String::from("es")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Locale used for long month names (`es`, `en_US`, `pt-BR`, ...).
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(GeneralConfig::default().locale, "es");
    }
}
