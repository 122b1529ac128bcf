//! Firebase Identity Toolkit provider.
//!
//! Calls the `accounts:*` REST methods directly via `reqwest`. Every method is a
//! JSON `POST` to `{endpoint}/accounts:{method}?key={api_key}`; rejections come
//! back as 4xx with `{"error": {"message": "CODE : detail"}}`.

use std::time::Duration;

use async_trait::async_trait;
use fin_core::Identity;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::browser_flow::{BrowserLauncher, RedirectListener, system_browser};
use crate::connection::ConnectionHandle;
use crate::credentials::{OAuthRequest, PasswordCredentials, SignUpProfile};
use crate::error::{AuthError, ProviderAuthError};
use crate::provider::{AccountCreated, IdentityProvider};

pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_OAUTH_TIMEOUT: Duration = Duration::from_secs(120);
const PASSWORD_PROVIDER: &str = "password";

pub struct FirebaseProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    oauth_timeout: Duration,
    browser: BrowserLauncher,
    connection: ConnectionHandle,
}

impl FirebaseProvider {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            oauth_timeout: DEFAULT_OAUTH_TIMEOUT,
            browser: system_browser(),
            connection: ConnectionHandle::new(),
        }
    }

    /// How long the OAuth flow waits for the browser redirect.
    #[must_use]
    pub fn with_oauth_timeout(mut self, timeout: Duration) -> Self {
        self.oauth_timeout = timeout;
        self
    }

    /// Replace the system browser used to open the provider's auth URI.
    #[must_use]
    pub fn with_browser(mut self, browser: BrowserLauncher) -> Self {
        self.browser = browser;
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/accounts:{method}?key={}",
            self.endpoint,
            urlencoding::encode(&self.api_key)
        )
    }

    /// POST `body` to an `accounts:` method and return the JSON reply.
    async fn call<B>(&self, method: &str, body: &B) -> Result<serde_json::Value, AuthError>
    where
        B: Serialize + Sync + ?Sized,
    {
        tracing::debug!(method, "identity toolkit request");
        let resp = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(format!("{method}: {e}")))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(format!("{method}: {e}")))?;

        if !status.is_success() {
            return Err(error_from_response(method, status.as_u16(), &bytes));
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::MalformedResponse(format!("{method}: {e}")))
    }
}

/// Decode a typed view of a successful reply.
fn decode<R: DeserializeOwned>(method: &str, raw: &serde_json::Value) -> Result<R, AuthError> {
    R::deserialize(raw).map_err(|e| AuthError::MalformedResponse(format!("{method}: {e}")))
}

/// Map a non-2xx reply onto the error taxonomy.
///
/// 5xx means the provider could not answer; anything else is a rejection whose
/// code is the message up to the first `" : "`.
fn error_from_response(method: &str, status: u16, body: &[u8]) -> AuthError {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: String,
    }

    if status >= 500 {
        return AuthError::ProviderUnavailable(format!("{method}: HTTP {status}"));
    }

    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            let message = envelope.error.message;
            let code = message
                .split_once(" : ")
                .map_or(message.as_str(), |(code, _)| code)
                .trim()
                .to_string();
            ProviderAuthError::new(code, message).into()
        }
        _ => ProviderAuthError::new(
            format!("HTTP_{status}"),
            String::from_utf8_lossy(body).into_owned(),
        )
        .into(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthUriRequest<'a> {
    provider_id: &'a str,
    continue_uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    oauth_scope: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpSignInRequest<'a> {
    request_uri: &'a str,
    session_id: &'a str,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthUriResponse {
    auth_uri: String,
    session_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdpSignInResponse {
    local_id: String,
    #[serde(default)]
    provider_id: Option<String>,
}

#[async_trait]
impl IdentityProvider for FirebaseProvider {
    fn connection(&self) -> &ConnectionHandle {
        &self.connection
    }

    async fn authenticate_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<Identity, AuthError> {
        const METHOD: &str = "signInWithPassword";
        let raw = self
            .call(
                METHOD,
                &PasswordSignInRequest {
                    email: &credentials.email,
                    password: &credentials.password,
                    return_secure_token: true,
                },
            )
            .await?;
        let response: SignInResponse = decode(METHOD, &raw)?;

        let identity = Identity::new(response.local_id, PASSWORD_PROVIDER).with_raw(raw);
        self.connection.notify(Some(identity.clone()));
        Ok(identity)
    }

    async fn create_account(&self, profile: &SignUpProfile) -> Result<AccountCreated, AuthError> {
        const METHOD: &str = "signUp";
        let raw = self
            .call(
                METHOD,
                &SignUpRequest {
                    email: &profile.credentials.email,
                    password: &profile.credentials.password,
                    display_name: profile.display_name(),
                    return_secure_token: true,
                },
            )
            .await?;
        let response: SignUpResponse = decode(METHOD, &raw)?;

        Ok(AccountCreated {
            uid: response.local_id,
            email: response.email,
        })
    }

    async fn authenticate_with_oauth(&self, request: &OAuthRequest) -> Result<Identity, AuthError> {
        const CREATE_AUTH_URI: &str = "createAuthUri";
        const SIGN_IN_WITH_IDP: &str = "signInWithIdp";

        let listener = RedirectListener::bind()?;
        let continue_uri = listener.callback_url();
        let provider_id = request.provider_id();
        let scope = request.scope.trim();

        let raw = self
            .call(
                CREATE_AUTH_URI,
                &CreateAuthUriRequest {
                    provider_id: &provider_id,
                    continue_uri: &continue_uri,
                    oauth_scope: (!scope.is_empty()).then_some(scope),
                },
            )
            .await?;
        let auth: CreateAuthUriResponse = decode(CREATE_AUTH_URI, &raw)?;

        let request_uri = listener
            .wait_in_browser(&auth.auth_uri, &self.browser, self.oauth_timeout)
            .await?;

        let raw = self
            .call(
                SIGN_IN_WITH_IDP,
                &IdpSignInRequest {
                    request_uri: &request_uri,
                    session_id: &auth.session_id,
                    return_secure_token: true,
                    return_idp_credential: true,
                },
            )
            .await?;
        let response: IdpSignInResponse = decode(SIGN_IN_WITH_IDP, &raw)?;

        let provider = response.provider_id.unwrap_or(provider_id);
        let identity = Identity::new(response.local_id, provider).with_raw(raw);
        self.connection.notify(Some(identity.clone()));
        Ok(identity)
    }

    fn invalidate_session(&self) {
        // Identity Toolkit tokens are bearer tokens; dropping them is the sign-out.
        self.connection.notify(None);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn method_url_encodes_key() {
        let provider = FirebaseProvider::new("a b", "http://localhost:9099/v1/");
        assert_eq!(
            provider.method_url("signUp"),
            "http://localhost:9099/v1/accounts:signUp?key=a%20b"
        );
    }

    #[test]
    fn rejection_code_is_message_prefix() {
        let error = error_from_response(
            "signInWithPassword",
            400,
            br#"{"error":{"code":400,"message":"TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"}}"#,
        );
        assert_eq!(error.provider_code(), Some("TOO_MANY_ATTEMPTS_TRY_LATER"));
        match error {
            AuthError::ProviderAuth(rejection) => {
                assert_eq!(rejection.message, "TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bare_code_message() {
        let error = error_from_response(
            "signUp",
            400,
            br#"{"error":{"code":400,"message":"EMAIL_EXISTS"}}"#,
        );
        assert!(error.is_email_taken());
    }

    #[test]
    fn server_errors_are_unavailability() {
        let error = error_from_response("signUp", 503, b"upstream down");
        assert!(matches!(error, AuthError::ProviderUnavailable(_)));
    }

    #[test]
    fn unparseable_rejection_keeps_status() {
        let error = error_from_response("signUp", 403, b"forbidden");
        assert_eq!(error.provider_code(), Some("HTTP_403"));
    }
}
