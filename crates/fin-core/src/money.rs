//! Currency canonicalization.
//!
//! Every monetary field is stored as a [`MoneyValue`]: the numeric amount plus
//! the display string derived from it. The display string is the source of
//! truth when a user typed one; the amount is re-derived from it and the
//! display re-rendered, so canonicalizing twice changes nothing.

use num_format::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const DEFAULT_SYMBOL: &str = "$";

/// Canonical numeric/display pair for a monetary amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MoneyValue {
    pub amount: f64,
    pub display: String,
}

impl MoneyValue {
    /// True when no amount has been entered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// Symbol and precision used to render display strings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Digits after the decimal mark. The app shows whole units.
    #[serde(default)]
    pub decimals: usize,
}

fn default_symbol() -> String {
    String::from(DEFAULT_SYMBOL)
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimals: 0,
        }
    }
}

impl CurrencyFormat {
    /// Canonicalize with the default [`AccountingEngine`].
    ///
    /// # Errors
    ///
    /// See [`format_currency`].
    pub fn format_currency(&self, amount: f64, display: &str) -> Result<MoneyValue, CoreError> {
        self.format_currency_with(&AccountingEngine, amount, display)
    }

    /// Canonicalize through a caller-supplied engine.
    ///
    /// # Errors
    ///
    /// See [`format_currency`].
    pub fn format_currency_with<E: CurrencyEngine + ?Sized>(
        &self,
        engine: &E,
        amount: f64,
        display: &str,
    ) -> Result<MoneyValue, CoreError> {
        let amount = if display.trim().is_empty() {
            amount
        } else {
            engine.parse(display)?
        };
        if !amount.is_finite() {
            return Err(CoreError::InvalidAmount {
                input: amount.to_string(),
            });
        }

        let display = engine.format(amount, &self.symbol, self.decimals);
        let amount = engine.parse(&display)?;
        Ok(MoneyValue { amount, display })
    }
}

/// Canonicalize `amount`/`display` with `$` and no decimals.
///
/// A non-empty `display` wins over `amount`. The returned amount is the value
/// the rendered display parses back to, which keeps the operation idempotent.
///
/// # Errors
///
/// Returns `CoreError::InvalidAmount` if `display` is non-empty but holds no
/// number, or if the amount is not finite.
pub fn format_currency(amount: f64, display: &str) -> Result<MoneyValue, CoreError> {
    CurrencyFormat::default().format_currency(amount, display)
}

/// Parsing and rendering of currency strings.
pub trait CurrencyEngine {
    /// Parse a display string into an amount.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` if no number can be read.
    fn parse(&self, display: &str) -> Result<f64, CoreError>;

    /// Render an amount with `symbol` and `decimals` fraction digits.
    fn format(&self, amount: f64, symbol: &str, decimals: usize) -> String;
}

/// Accounting-style engine: `,` thousands, `.` decimal mark, `$-1,234` negatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountingEngine;

impl CurrencyEngine for AccountingEngine {
    fn parse(&self, display: &str) -> Result<f64, CoreError> {
        let invalid = || CoreError::InvalidAmount {
            input: display.to_string(),
        };

        let trimmed = display.trim();
        // Accounting negatives wrap the whole amount: `(300)`, `$(300)`, `($300)`.
        let unsigned = trimmed.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '(');
        let parenthesized = unsigned.starts_with('(') && trimmed.ends_with(')');
        let mut cleaned: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
            .collect();
        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if parenthesized && !cleaned.starts_with('-') {
            cleaned.insert(0, '-');
        }

        let value: f64 = cleaned.parse().map_err(|_| invalid())?;
        if value.is_finite() { Ok(value) } else { Err(invalid()) }
    }

    fn format(&self, amount: f64, symbol: &str, decimals: usize) -> String {
        let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
        // Half-up, so 2.5 → 3 and -2.5 → -2.
        let rounded = (amount * factor + 0.5).floor() / factor;
        let negative = rounded < 0.0;
        let magnitude = rounded.abs();

        let mut body = group_thousands(&format!("{:.0}", magnitude.trunc()), Locale::en);
        if decimals > 0 {
            let fixed = format!("{magnitude:.decimals$}");
            if let Some((_, fraction)) = fixed.split_once('.') {
                body.push('.');
                body.push_str(fraction);
            }
        }

        if negative {
            format!("{symbol}-{body}")
        } else {
            format!("{symbol}{body}")
        }
    }
}

/// Insert the locale's thousands separator into a run of integer digits.
///
/// Works on the rendered digits so amounts beyond any integer type keep every
/// digit instead of saturating.
fn group_thousands(digits: &str, locale: Locale) -> String {
    let separator = locale.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
