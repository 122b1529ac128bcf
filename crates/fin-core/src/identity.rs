use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated user identity as issued by the external identity provider.
///
/// Produced by `fin-auth` providers, held long-term by the session store.
/// `raw` keeps the provider payload untouched for callers that need
/// provider-specific fields (tokens, display name, expiry).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Identity {
    /// Provider user ID.
    pub uid: String,
    /// Sign-in method, e.g. `"password"` or `"github.com"`.
    pub provider: String,
    /// Provider response payload.
    #[serde(default)]
    pub raw: serde_json::Value,
}

impl Identity {
    #[must_use]
    pub fn new(uid: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            provider: provider.into(),
            raw: serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn with_raw(mut self, raw: serde_json::Value) -> Self {
        self.raw = raw;
        self
    }

    /// Read a string field from the raw provider payload.
    #[must_use]
    pub fn raw_str(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.raw_str("email")
    }
}
