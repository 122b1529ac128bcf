use clap::{ArgGroup, Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email/password or through an OAuth provider.
    Login(AuthLoginArgs),
    /// Create an email/password account.
    Signup(AuthSignupArgs),
    /// Sign out of the provider and clear the session.
    Logout,
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("method").required(true).args(["email", "oauth"])))]
pub struct AuthLoginArgs {
    #[arg(long, requires = "password")]
    pub email: Option<String>,
    #[arg(long, requires = "email")]
    pub password: Option<String>,
    /// OAuth provider (`github`, `google`, or a provider id like `github.com`).
    #[arg(long)]
    pub oauth: Option<String>,
    /// Scope requested from the OAuth provider.
    #[arg(long, default_value = "")]
    pub scope: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Display name stored with the profile.
    #[arg(long)]
    pub username: Option<String>,
}
