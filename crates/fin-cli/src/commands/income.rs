use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use fin_config::FinConfig;
use fin_core::collections::{group_by_year, index_of_by_uid};
use fin_core::entities::IncomeEntry;
use fin_core::enums::IncomeKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IncomeCommands;
use crate::cli::subcommands::income::{IncomeAddArgs, IncomeFindArgs, IncomeGroupArgs};
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

#[derive(Serialize)]
struct IncomeYearGroup {
    count: usize,
    total: f64,
    entries: Vec<IncomeEntry>,
}

#[derive(Serialize)]
struct IncomeFindResponse<'a> {
    index: usize,
    entry: &'a IncomeEntry,
}

/// Handle `fin income <subcommand>`.
pub fn handle(action: &IncomeCommands, flags: &GlobalFlags, config: &FinConfig) -> anyhow::Result<()> {
    match action {
        IncomeCommands::Add(args) => {
            let entry = add(args, config)?;
            output(&entry, flags.format)
        }
        IncomeCommands::Group(args) => output(&group(args)?, flags.format),
        IncomeCommands::Find(args) => {
            let entries = read_entries(&args.file)?;
            let index = find(&entries, args)?;
            output(
                &IncomeFindResponse {
                    index,
                    entry: &entries[index],
                },
                flags.format,
            )
        }
    }
}

fn add(args: &IncomeAddArgs, config: &FinConfig) -> anyhow::Result<IncomeEntry> {
    let kind: IncomeKind = parse_enum(&args.kind, "kind")?;
    let amount = args.amount.unwrap_or_default();
    let display = args.display.as_deref().unwrap_or_default();

    let mut entry = match &args.date {
        Some(date) => IncomeEntry::new(kind, amount, display, date.as_str(), &config.currency)?,
        None => {
            let today = chrono::Local::now().date_naive();
            IncomeEntry::new(kind, amount, display, &today, &config.currency)?
        }
    };
    if let Some(note) = &args.note {
        entry = entry.with_note(note.clone());
    }

    if let Some(path) = &args.file {
        let mut entries = if path.exists() {
            read_entries(path)?
        } else {
            Vec::new()
        };
        entries.push(entry.clone());
        write_entries(path, &entries)?;
        tracing::info!(uid = %entry.uid, file = %path.display(), count = entries.len(), "income entry saved");
    }

    Ok(entry)
}

fn group(args: &IncomeGroupArgs) -> anyhow::Result<BTreeMap<String, IncomeYearGroup>> {
    let entries = read_entries(&args.file)?;
    Ok(group_by_year(entries)
        .into_iter()
        .map(|(year, entries)| {
            let total: f64 = entries.iter().map(|entry| entry.money.amount).sum();
            let summary = IncomeYearGroup {
                count: entries.len(),
                total,
                entries,
            };
            (year, summary)
        })
        .collect())
}

fn find(entries: &[IncomeEntry], args: &IncomeFindArgs) -> anyhow::Result<usize> {
    index_of_by_uid(entries, &args.uid).with_context(|| {
        format!(
            "no income entry with uid '{}' in {}",
            args.uid,
            args.file.display()
        )
    })
}

fn read_entries(path: &Path) -> anyhow::Result<Vec<IncomeEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of income entries", path.display()))
}

fn write_entries(path: &Path, entries: &[IncomeEntry]) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn add_args(kind: &str, display: &str, date: &str, file: Option<PathBuf>) -> IncomeAddArgs {
        IncomeAddArgs {
            kind: kind.into(),
            amount: None,
            display: Some(display.into()),
            date: Some(date.into()),
            note: None,
            file,
        }
    }

    #[test]
    fn add_shapes_entry() {
        let config = FinConfig::default();
        let entry = add(&add_args("salary", "1500", "2020-03-15", None), &config).expect("add");

        assert_eq!(entry.kind, IncomeKind::Salary);
        assert_eq!(entry.money.display, "$1,500");
        assert_eq!(entry.date_created.year, "2020");
        assert!(fin_core::ids::is_guid(&entry.uid));
    }

    #[test]
    fn add_rejects_unknown_kind() {
        let config = FinConfig::default();
        let error = add(&add_args("lottery", "1", "2020-01-01", None), &config).expect_err("kind");
        assert!(error.to_string().contains("invalid kind"));
    }

    #[test]
    fn add_defaults_to_today() {
        let config = FinConfig::default();
        let mut args = add_args("business", "10", "", None);
        args.date = None;
        let entry = add(&args, &config).expect("add");

        let today = chrono::Local::now().date_naive();
        assert_eq!(entry.date_created.year, today.format("%Y").to_string());
    }

    #[test]
    fn entries_accumulate_in_file_then_group_and_find() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("incomes.json");
        let config = FinConfig::default();

        let first = add(&add_args("salary", "100", "2020-01-10", Some(file.clone())), &config)
            .expect("first");
        add(&add_args("investment", "50", "2021-06-01", Some(file.clone())), &config)
            .expect("second");
        let third = add(&add_args("salary", "25", "2020-12-31", Some(file.clone())), &config)
            .expect("third");

        let groups = group(&IncomeGroupArgs { file: file.clone() }).expect("group");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["2020"].count, 2);
        assert_eq!(groups["2020"].total, 125.0);
        assert_eq!(groups["2020"].entries[0].uid, first.uid);
        assert_eq!(groups["2020"].entries[1].uid, third.uid);
        assert_eq!(groups["2021"].count, 1);

        let entries = read_entries(&file).expect("read");
        let index = find(
            &entries,
            &IncomeFindArgs {
                file: file.clone(),
                uid: third.uid.clone(),
            },
        )
        .expect("find");
        assert_eq!(index, 2);

        let missing = find(
            &entries,
            &IncomeFindArgs {
                file,
                uid: "nope".into(),
            },
        )
        .expect_err("missing");
        assert!(missing.to_string().contains("no income entry with uid 'nope'"));
    }

    #[test]
    fn read_rejects_non_array_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("bad.json");
        std::fs::write(&file, r#"{"not": "an array"}"#).expect("write");

        let error = read_entries(&file).expect_err("should fail");
        assert!(error.to_string().contains("not a JSON array"));
    }
}
