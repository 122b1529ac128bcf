use clap::{Args, Subcommand};

/// Date commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DateCommands {
    /// Split a date into year, month, and day tokens.
    Split(DateSplitArgs),
    /// Long month name in a locale.
    Month(DateMonthArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DateSplitArgs {
    /// Date text (`2020-03-15`, RFC 3339, RFC 2822, `2020/Mar/15`, ...).
    pub date: String,
}

#[derive(Clone, Debug, Args)]
pub struct DateMonthArgs {
    pub date: String,
    /// Locale tag (`es`, `en_US`, `pt-BR`). Defaults to `general.locale`.
    #[arg(long)]
    pub locale: Option<String>,
}
