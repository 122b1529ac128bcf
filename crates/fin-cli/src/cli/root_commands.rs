use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, DateCommands, IncomeCommands, MoneyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a random record identifier.
    Guid,
    /// Date decomposition and month names.
    Date {
        #[command(subcommand)]
        action: DateCommands,
    },
    /// Currency canonicalization.
    Money {
        #[command(subcommand)]
        action: MoneyCommands,
    },
    /// Income entries.
    Income {
        #[command(subcommand)]
        action: IncomeCommands,
    },
    /// Sign in, sign up, and sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}
