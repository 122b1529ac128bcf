pub mod auth;
pub mod date;
pub mod guid;
pub mod income;
pub mod money;
pub mod shared;

use fin_config::FinConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    config: &FinConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Guid => guid::handle(flags),
        Commands::Date { action } => date::handle(&action, flags, config),
        Commands::Money { action } => money::handle(&action, flags, config),
        Commands::Income { action } => income::handle(&action, flags, config),
        Commands::Auth { action } => auth::handle(&action, flags, config).await,
    }
}
