//! The authentication façade.

use std::sync::Arc;

use fin_core::Identity;
use fin_core::enums::SessionSync;

use crate::connection::ListenerId;
use crate::credentials::{OAuthRequest, PasswordCredentials, SignUpProfile};
use crate::error::AuthError;
use crate::provider::IdentityProvider;
use crate::session::SessionStore;

/// Single entry point for login, sign-up and logout.
///
/// Successful logins are written to the [`SessionStore`]; failures leave it
/// untouched. Provider connection changes are observed from construction on and
/// either only logged ([`SessionSync::Explicit`]) or also mirrored into the
/// session ([`SessionSync::ProviderAuthoritative`]). Dropping the façade
/// unregisters its listener from the provider.
pub struct AuthFacade<P: IdentityProvider + ?Sized> {
    provider: Arc<P>,
    session: Arc<SessionStore>,
    sync: SessionSync,
    listener: ListenerId,
}

impl<P> AuthFacade<P>
where
    P: IdentityProvider + ?Sized,
{
    pub fn new(provider: Arc<P>, session: Arc<SessionStore>, sync: SessionSync) -> Self {
        let listener_session = Arc::clone(&session);
        let listener = provider
            .connection()
            .on_connection_change(move |identity| {
                match identity {
                    Some(identity) => tracing::info!(
                        uid = %identity.uid,
                        provider = %identity.provider,
                        "identity provider connected"
                    ),
                    None => tracing::info!("identity provider disconnected"),
                }

                if sync == SessionSync::ProviderAuthoritative {
                    match identity {
                        Some(identity) => listener_session.set_auth_data(identity.clone()),
                        None => listener_session.destroy(),
                    }
                }
            });

        Self {
            provider,
            session,
            sync,
            listener,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub const fn session_sync(&self) -> SessionSync {
        self.sync
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`] unchanged; the session is not touched.
    pub async fn log_in_with_password(
        &self,
        credentials: PasswordCredentials,
    ) -> Result<Identity, AuthError> {
        match self.provider.authenticate_with_password(&credentials).await {
            Ok(identity) => {
                tracing::info!(uid = %identity.uid, "logged in with password");
                self.session.set_auth_data(identity.clone());
                Ok(identity)
            }
            Err(error) => {
                tracing::warn!(email = %credentials.email, %error, "password login failed");
                Err(error)
            }
        }
    }

    /// Create an account and return its uid. Does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; use [`AuthError::is_email_taken`] to
    /// detect an already registered email.
    pub async fn sign_up_with_password(&self, profile: SignUpProfile) -> Result<String, AuthError> {
        match self.provider.create_account(&profile).await {
            Ok(created) => {
                tracing::info!(uid = %created.uid, "account created");
                Ok(created.uid)
            }
            Err(error) => {
                tracing::warn!(email = %profile.credentials.email, %error, "sign-up failed");
                Err(error)
            }
        }
    }

    /// Authenticate through an external OAuth provider (`github`, `google.com`, ...).
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`], including
    /// [`AuthError::BrowserFlowFailed`] when the redirect never arrives.
    pub async fn log_in_with_oauth(
        &self,
        provider: &str,
        scope: &str,
    ) -> Result<Identity, AuthError> {
        let request = OAuthRequest::new(provider, scope);
        match self.provider.authenticate_with_oauth(&request).await {
            Ok(identity) => {
                tracing::info!(uid = %identity.uid, provider = %identity.provider, "logged in with oauth");
                self.session.set_auth_data(identity.clone());
                Ok(identity)
            }
            Err(error) => {
                tracing::warn!(provider = %request.provider, %error, "oauth login failed");
                Err(error)
            }
        }
    }

    /// Invalidate the provider session, then clear the local one.
    pub fn log_out(&self) {
        self.provider.invalidate_session();
        self.session.destroy();
        tracing::info!("logged out");
    }
}

impl<P> Drop for AuthFacade<P>
where
    P: IdentityProvider + ?Sized,
{
    fn drop(&mut self) {
        self.provider.connection().remove_listener(self.listener);
    }
}
