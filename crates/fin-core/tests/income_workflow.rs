//! Shaping, finding, and grouping income entries the way the income pages do.

use fin_core::collections::{group_by_year, index_of_by_uid};
use fin_core::entities::IncomeEntry;
use fin_core::enums::IncomeKind;
use fin_core::money::CurrencyFormat;
use pretty_assertions::assert_eq;

fn entries() -> Vec<IncomeEntry> {
    let currency = CurrencyFormat::default();
    [
        (IncomeKind::Salary, "$3,000", "2020-01-31"),
        (IncomeKind::Business, "$450", "2021-03-15"),
        (IncomeKind::Investment, "$1,200", "2020-07-01"),
        (IncomeKind::Salary, "$3,100", "2021-01-31"),
    ]
    .into_iter()
    .map(|(kind, display, date)| {
        IncomeEntry::new(kind, 0.0, display, date, &currency).expect("entry")
    })
    .collect()
}

#[test]
fn groups_entries_by_year_in_input_order() {
    let entries = entries();
    let groups = group_by_year(&entries);

    let displays_2020: Vec<&str> = groups["2020"].iter().map(|e| e.money.display.as_str()).collect();
    let displays_2021: Vec<&str> = groups["2021"].iter().map(|e| e.money.display.as_str()).collect();
    assert_eq!(displays_2020, vec!["$3,000", "$1,200"]);
    assert_eq!(displays_2021, vec!["$450", "$3,100"]);
}

#[test]
fn finds_entries_by_uid() {
    let entries = entries();
    let target = entries[2].uid.clone();
    assert_eq!(index_of_by_uid(&entries, &target), Some(2));
    assert_eq!(index_of_by_uid(&entries, "missing"), None);
}

#[test]
fn yearly_totals_from_canonical_amounts() {
    let groups = group_by_year(entries());
    let totals: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(year, entries)| (year, entries.iter().map(|e| e.money.amount).sum()))
        .collect();
    assert_eq!(
        totals,
        vec![("2020".to_string(), 4200.0), ("2021".to_string(), 3550.0)]
    );
}
