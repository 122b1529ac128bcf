use anyhow::Context;
use fin_auth::PasswordCredentials;
use fin_config::FinConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    uid: String,
    provider: String,
    email: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &FinConfig,
) -> anyhow::Result<()> {
    let auth = bootstrap::auth_facade(config)?;

    let identity = match (&args.email, &args.password, &args.oauth) {
        (Some(email), Some(password), None) => auth
            .log_in_with_password(PasswordCredentials::new(email, password))
            .await
            .context("auth login failed")?,
        (None, None, Some(provider)) => auth
            .log_in_with_oauth(provider, &args.scope)
            .await
            .with_context(|| format!("auth login via {provider} failed"))?,
        _ => anyhow::bail!("auth login: pass --email and --password, or --oauth PROVIDER"),
    };

    output(
        &AuthLoginResponse {
            authenticated: auth.is_logged_in(),
            email: identity.email().map(str::to_string),
            uid: identity.uid,
            provider: identity.provider,
        },
        flags.format,
    )
}
