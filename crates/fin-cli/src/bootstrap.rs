use std::sync::Arc;

use anyhow::Context;
use fin_auth::firebase::FirebaseProvider;
use fin_auth::{AuthFacade, IdentityProvider as _, SessionFile, SessionStore};
use fin_config::FinConfig;

pub fn load_config() -> anyhow::Result<FinConfig> {
    FinConfig::load_with_dotenv().context("failed to load finapp configuration")
}

/// Session for this invocation, restored from the session file when there is one.
fn session_store(config: &FinConfig) -> SessionStore {
    match config.auth.session_path() {
        Some(path) => SessionStore::persistent(SessionFile::new(path)),
        None => {
            tracing::warn!("no config directory; the session ends with this command");
            SessionStore::new()
        }
    }
}

/// Wire the Firebase provider and the persisted session into a façade.
///
/// A restored identity is handed to the provider as well, so both sides agree
/// on who is signed in before any listener is registered.
pub fn auth_facade(config: &FinConfig) -> anyhow::Result<AuthFacade<FirebaseProvider>> {
    let firebase = config
        .firebase
        .require()
        .context("auth commands need FINAPP_FIREBASE__API_KEY")?;

    let provider = FirebaseProvider::new(&firebase.api_key, &firebase.auth_endpoint)
        .with_oauth_timeout(config.auth.oauth_timeout());

    let session = Arc::new(session_store(config));
    if let Some(identity) = session.get_auth_data() {
        tracing::debug!(uid = %identity.uid, "resuming saved session");
        provider.connection().notify(Some(identity));
    }

    Ok(AuthFacade::new(
        Arc::new(provider),
        session,
        config.auth.session_sync,
    ))
}
