use fin_auth::{PasswordCredentials, SignUpProfile};
use fin_config::FinConfig;
use fin_core::entities::UserProfile;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthSignupResponse {
    created: bool,
    uid: String,
    email: String,
    authenticated: bool,
}

pub async fn handle(
    args: &AuthSignupArgs,
    flags: &GlobalFlags,
    config: &FinConfig,
) -> anyhow::Result<()> {
    let auth = bootstrap::auth_facade(config)?;
    let profile = SignUpProfile::new(
        PasswordCredentials::new(&args.email, &args.password),
        UserProfile::new(args.username.clone().unwrap_or_default(), &args.email),
    );

    let uid = match auth.sign_up_with_password(profile).await {
        Ok(uid) => uid,
        Err(error) if error.is_email_taken() => anyhow::bail!(
            "auth signup: {email} is already registered; run `fin auth login --email {email}` instead",
            email = args.email
        ),
        Err(error) => return Err(anyhow::Error::new(error).context("auth signup failed")),
    };

    output(
        &AuthSignupResponse {
            created: true,
            uid,
            email: args.email.clone(),
            authenticated: auth.is_logged_in(),
        },
        flags.format,
    )
}
