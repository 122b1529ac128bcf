use thiserror::Error;

/// Provider codes meaning the email already has an account.
const EMAIL_TAKEN_CODES: [&str; 2] = ["EMAIL_EXISTS", "EMAIL_TAKEN"];

/// Provider codes meaning the email/password pair was refused.
const INVALID_CREDENTIAL_CODES: [&str; 4] = [
    "INVALID_PASSWORD",
    "EMAIL_NOT_FOUND",
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_EMAIL",
];

/// A request the identity provider understood and refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ProviderAuthError {
    /// Provider-defined code, e.g. `"EMAIL_EXISTS"`.
    pub code: String,
    /// Provider message, unmodified.
    pub message: String,
}

impl ProviderAuthError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The email is already registered; callers usually route to login.
    #[must_use]
    pub fn is_email_taken(&self) -> bool {
        EMAIL_TAKEN_CODES.contains(&self.code.as_str())
    }

    #[must_use]
    pub fn is_invalid_credentials(&self) -> bool {
        INVALID_CREDENTIAL_CODES.contains(&self.code.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("identity provider rejected the request: {0}")]
    ProviderAuth(#[from] ProviderAuthError),

    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("malformed identity provider response: {0}")]
    MalformedResponse(String),

    #[error("browser login failed: {0}")]
    BrowserFlowFailed(String),

    #[error("session persistence failed: {0}")]
    SessionPersistence(String),
}

impl AuthError {
    /// Provider code when the provider rejected the request.
    #[must_use]
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::ProviderAuth(rejection) => Some(rejection.code.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_email_taken(&self) -> bool {
        matches!(self, Self::ProviderAuth(rejection) if rejection.is_email_taken())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_taken_codes() {
        assert!(ProviderAuthError::new("EMAIL_EXISTS", "EMAIL_EXISTS").is_email_taken());
        assert!(ProviderAuthError::new("EMAIL_TAKEN", "taken").is_email_taken());
        assert!(!ProviderAuthError::new("INVALID_PASSWORD", "nope").is_email_taken());
    }

    #[test]
    fn invalid_credentials_codes() {
        assert!(ProviderAuthError::new("INVALID_LOGIN_CREDENTIALS", "").is_invalid_credentials());
        assert!(!ProviderAuthError::new("EMAIL_EXISTS", "").is_invalid_credentials());
    }

    #[test]
    fn provider_code_only_for_rejections() {
        let rejected = AuthError::from(ProviderAuthError::new("EMAIL_EXISTS", "EMAIL_EXISTS"));
        assert_eq!(rejected.provider_code(), Some("EMAIL_EXISTS"));
        assert!(rejected.is_email_taken());

        let offline = AuthError::ProviderUnavailable("connection refused".into());
        assert_eq!(offline.provider_code(), None);
        assert!(!offline.is_email_taken());
    }

    #[test]
    fn display_keeps_provider_message() {
        let error = AuthError::from(ProviderAuthError::new(
            "TOO_MANY_ATTEMPTS_TRY_LATER",
            "TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled",
        ));
        assert_eq!(
            error.to_string(),
            "identity provider rejected the request: TOO_MANY_ATTEMPTS_TRY_LATER: TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"
        );
    }
}
