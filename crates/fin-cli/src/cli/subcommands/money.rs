use clap::{Args, Subcommand};

/// Money commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MoneyCommands {
    /// Canonicalize an amount or display string.
    Format(MoneyFormatArgs),
}

#[derive(Clone, Debug, Args)]
pub struct MoneyFormatArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,
    /// Display string; wins over --amount when both are given.
    #[arg(long)]
    pub display: Option<String>,
}
