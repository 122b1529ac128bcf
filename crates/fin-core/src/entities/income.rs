use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collections::FinanceRecord;
use crate::dates::{DateInput, DateParts, split_date_format};
use crate::enums::IncomeKind;
use crate::errors::CoreError;
use crate::ids::generate_guid;
use crate::money::{CurrencyFormat, MoneyValue};

/// One salary, investment, or business income record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IncomeEntry {
    pub uid: String,
    pub kind: IncomeKind,
    pub money: MoneyValue,
    pub date_created: DateParts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl IncomeEntry {
    /// Shape a new entry: fresh GUID, canonical money, decomposed date.
    ///
    /// `display` wins over `amount` when non-empty, as in
    /// [`crate::money::format_currency`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` or `CoreError::InvalidDate` when the
    /// inputs cannot be canonicalized.
    pub fn new<D: DateInput + ?Sized>(
        kind: IncomeKind,
        amount: f64,
        display: &str,
        date: &D,
        currency: &CurrencyFormat,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            uid: generate_guid(),
            kind,
            money: currency.format_currency(amount, display)?,
            date_created: split_date_format(date)?,
            note: None,
        })
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl FinanceRecord for IncomeEntry {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn date_created(&self) -> &DateParts {
        &self.date_created
    }
}
