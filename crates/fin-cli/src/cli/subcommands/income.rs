use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Income entry commands. Files hold a JSON array of entries.
#[derive(Clone, Debug, Subcommand)]
pub enum IncomeCommands {
    /// Create an entry; appended to --file when given.
    Add(IncomeAddArgs),
    /// Group the entries of a file by year.
    Group(IncomeGroupArgs),
    /// Find an entry by uid.
    Find(IncomeFindArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IncomeAddArgs {
    /// salary, investment, or business
    #[arg(long)]
    pub kind: String,
    #[arg(long, allow_negative_numbers = true, conflicts_with = "display")]
    pub amount: Option<f64>,
    #[arg(long)]
    pub display: Option<String>,
    /// Creation date; defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct IncomeGroupArgs {
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct IncomeFindArgs {
    pub file: PathBuf,
    pub uid: String,
}
