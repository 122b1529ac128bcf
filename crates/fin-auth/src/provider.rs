//! The identity provider seam behind the façade.

use async_trait::async_trait;
use fin_core::Identity;

use crate::connection::ConnectionHandle;
use crate::credentials::{OAuthRequest, PasswordCredentials, SignUpProfile};
use crate::error::AuthError;

/// Result of a successful account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreated {
    pub uid: String,
    pub email: Option<String>,
}

/// External identity provider behind the [`AuthFacade`](crate::AuthFacade).
///
/// Implementations report every change of signed-in user through
/// [`connection`](Self::connection). Account creation does not sign the user in.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn connection(&self) -> &ConnectionHandle;

    async fn authenticate_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<Identity, AuthError>;

    async fn create_account(&self, profile: &SignUpProfile) -> Result<AccountCreated, AuthError>;

    async fn authenticate_with_oauth(&self, request: &OAuthRequest) -> Result<Identity, AuthError>;

    /// Forget the provider-side session. Never fails.
    fn invalidate_session(&self);
}
