//! Caller-owned credential payloads, passed by value into façade operations.

use std::fmt;

use fin_core::entities::UserProfile;

/// Email/password pair for the password flow.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

impl PasswordCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// External provider and the scope to request from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequest {
    /// Short name (`github`) or provider id (`github.com`).
    pub provider: String,
    pub scope: String,
}

impl OAuthRequest {
    pub fn new(provider: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            scope: scope.into(),
        }
    }

    /// Provider id as the identity provider expects it (`github` → `github.com`).
    #[must_use]
    pub fn provider_id(&self) -> String {
        let provider = self.provider.trim().to_ascii_lowercase();
        if provider.contains('.') {
            return provider;
        }
        match provider.as_str() {
            "github" | "google" | "facebook" | "twitter" | "apple" | "microsoft" | "yahoo" => {
                format!("{provider}.com")
            }
            _ => provider,
        }
    }
}

/// Account creation payload: credentials plus the profile captured at sign-up.
#[derive(Debug, Clone)]
pub struct SignUpProfile {
    pub credentials: PasswordCredentials,
    pub profile: UserProfile,
}

impl SignUpProfile {
    #[must_use]
    pub const fn new(credentials: PasswordCredentials, profile: UserProfile) -> Self {
        Self {
            credentials,
            profile,
        }
    }

    /// Username to publish as the account display name, if one was given.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let username = self.profile.username.trim();
        (!username.is_empty()).then_some(username)
    }
}
