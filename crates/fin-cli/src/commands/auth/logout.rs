use fin_config::FinConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    was_logged_in: bool,
    uid: Option<String>,
}

pub fn handle(flags: &GlobalFlags, config: &FinConfig) -> anyhow::Result<()> {
    let auth = bootstrap::auth_facade(config)?;
    let previous = auth.session().get_auth_data();
    auth.log_out();
    output(
        &AuthLogoutResponse {
            was_logged_in: previous.is_some(),
            uid: previous.map(|identity| identity.uid),
        },
        flags.format,
    )
}
