use fin_config::FinConfig;
use fin_core::dates::{month_long_name, split_date_format};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DateCommands;
use crate::output::output;

#[derive(Serialize)]
struct DateMonthResponse {
    date: String,
    locale: String,
    month: String,
}

/// Handle `fin date <subcommand>`.
pub fn handle(action: &DateCommands, flags: &GlobalFlags, config: &FinConfig) -> anyhow::Result<()> {
    match action {
        DateCommands::Split(args) => {
            let parts = split_date_format(args.date.as_str())?;
            output(&parts, flags.format)
        }
        DateCommands::Month(args) => {
            let locale = args.locale.as_deref().unwrap_or(&config.general.locale);
            let month = month_long_name(args.date.as_str(), locale)?;
            output(
                &DateMonthResponse {
                    date: args.date.clone(),
                    locale: locale.to_string(),
                    month,
                },
                flags.format,
            )
        }
    }
}
