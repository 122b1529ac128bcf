//! Lookup and grouping over ordered sequences of finance records.
//!
//! The helpers never own or reorder the caller's records; grouping keeps the
//! input order inside each bucket.

use std::collections::BTreeMap;

use crate::dates::DateParts;

/// A record addressable by uid and dated by its creation day.
pub trait FinanceRecord {
    fn uid(&self) -> &str;
    fn date_created(&self) -> &DateParts;
}

impl<T: FinanceRecord + ?Sized> FinanceRecord for &T {
    fn uid(&self) -> &str {
        (**self).uid()
    }

    fn date_created(&self) -> &DateParts {
        (**self).date_created()
    }
}

/// Position of the first record whose uid equals `uid`.
#[must_use]
pub fn index_of_by_uid<T: FinanceRecord>(records: &[T], uid: &str) -> Option<usize> {
    records.iter().position(|record| record.uid() == uid)
}

/// Partition records by `date_created().year`.
///
/// Pass `&records` to group borrowed records, or the vector itself to move them.
pub fn group_by_year<T, I>(records: I) -> BTreeMap<String, Vec<T>>
where
    T: FinanceRecord,
    I: IntoIterator<Item = T>,
{
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for record in records {
        let year = record.date_created().year.clone();
        groups.entry(year).or_default().push(record);
    }
    groups
}
