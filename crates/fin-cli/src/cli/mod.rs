use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fin` binary.
#[derive(Debug, Parser)]
#[command(name = "fin", version, about = "finapp - personal finance toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, DateCommands, IncomeCommands, MoneyCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["fin", "--format", "raw", "--verbose", "guid"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Guid));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fin", "date", "split", "2020-03-15", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Date {
                action: DateCommands::Split(args),
            } => assert_eq!(args.date, "2020-03-15"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["fin", "--format", "table", "guid"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn date_month_takes_optional_locale() {
        let cli = Cli::try_parse_from(["fin", "date", "month", "2021-01-05", "--locale", "en"])
            .expect("cli should parse");
        match cli.command {
            Commands::Date {
                action: DateCommands::Month(args),
            } => assert_eq!(args.locale.as_deref(), Some("en")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn money_format_accepts_negative_amount() {
        let cli = Cli::try_parse_from(["fin", "money", "format", "--amount", "-12.5"])
            .expect("cli should parse");
        match cli.command {
            Commands::Money {
                action: MoneyCommands::Format(args),
            } => {
                assert_eq!(args.amount, Some(-12.5));
                assert_eq!(args.display, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn income_add_amount_conflicts_with_display() {
        let parsed = Cli::try_parse_from([
            "fin", "income", "add", "--kind", "salary", "--amount", "5", "--display", "$5",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn income_find_takes_file_and_uid() {
        let cli = Cli::try_parse_from(["fin", "income", "find", "incomes.json", "abc"])
            .expect("cli should parse");
        match cli.command {
            Commands::Income {
                action: IncomeCommands::Find(args),
            } => {
                assert_eq!(args.file.to_str(), Some("incomes.json"));
                assert_eq!(args.uid, "abc");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn auth_login_requires_a_method() {
        assert!(Cli::try_parse_from(["fin", "auth", "login"]).is_err());
        assert!(
            Cli::try_parse_from(["fin", "auth", "login", "--email", "a@b.c"]).is_err(),
            "email without password"
        );
        assert!(
            Cli::try_parse_from([
                "fin", "auth", "login", "--email", "a@b.c", "--password", "p", "--oauth", "github"
            ])
            .is_err(),
            "password and oauth together"
        );
    }

    #[test]
    fn auth_login_with_oauth() {
        let cli = Cli::try_parse_from([
            "fin", "auth", "login", "--oauth", "github", "--scope", "user:email",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Auth {
                action: AuthCommands::Login(args),
            } => {
                assert_eq!(args.oauth.as_deref(), Some("github"));
                assert_eq!(args.scope, "user:email");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn auth_signup_defaults_username() {
        let cli = Cli::try_parse_from([
            "fin", "auth", "signup", "--email", "a@b.c", "--password", "p",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Auth {
                action: AuthCommands::Signup(args),
            } => assert_eq!(args.username, None),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
