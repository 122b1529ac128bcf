use fin_config::FinConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MoneyCommands;
use crate::output::output;

/// Handle `fin money <subcommand>`.
pub fn handle(action: &MoneyCommands, flags: &GlobalFlags, config: &FinConfig) -> anyhow::Result<()> {
    match action {
        MoneyCommands::Format(args) => {
            let money = config.currency.format_currency(
                args.amount.unwrap_or_default(),
                args.display.as_deref().unwrap_or_default(),
            )?;
            output(&money, flags.format)
        }
    }
}
