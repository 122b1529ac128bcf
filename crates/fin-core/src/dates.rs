//! Date decomposition and localized month names.
//!
//! Income pages group and label entries by calendar parts, so every record
//! carries a [`DateParts`] built by [`split_date_format`]. Parsing is
//! timezone-naive: a zoned timestamp contributes the calendar date in its own
//! offset.

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// `%Y/%b/%d` is the form `DateParts` joins back into.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%Y/%b/%d", "%Y-%b-%d", "%Y/%B/%d"];

/// A calendar date decomposed into display tokens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct DateParts {
    /// Textual form of the source value.
    pub original: String,
    /// Two-digit day of month (`"05"`).
    pub day: String,
    /// Three-letter English month abbreviation (`"Jan"`).
    pub month: String,
    /// Four-digit year (`"2020"`).
    pub year: String,
}

impl DateParts {
    /// Rebuild the calendar date from the split tokens.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the parts were edited into something
    /// that is no longer a calendar date.
    pub fn to_naive_date(&self) -> Result<NaiveDate, CoreError> {
        parse_date_str(&format!("{}/{}/{}", self.year, self.month, self.day))
    }
}

/// Anything that can be read as a calendar date.
pub trait DateInput {
    /// Resolve the value to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the value is not a valid date.
    fn to_calendar_date(&self) -> Result<NaiveDate, CoreError>;

    /// Textual form recorded in [`DateParts::original`].
    fn original(&self) -> String;
}

impl DateInput for str {
    fn to_calendar_date(&self) -> Result<NaiveDate, CoreError> {
        parse_date_str(self)
    }

    fn original(&self) -> String {
        self.trim().to_string()
    }
}

impl DateInput for String {
    fn to_calendar_date(&self) -> Result<NaiveDate, CoreError> {
        parse_date_str(self)
    }

    fn original(&self) -> String {
        self.as_str().original()
    }
}

impl DateInput for NaiveDate {
    fn to_calendar_date(&self) -> Result<NaiveDate, CoreError> {
        Ok(*self)
    }

    fn original(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl DateInput for NaiveDateTime {
    fn to_calendar_date(&self) -> Result<NaiveDate, CoreError> {
        Ok(self.date())
    }

    fn original(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

impl<Tz: TimeZone> DateInput for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn to_calendar_date(&self) -> Result<NaiveDate, CoreError> {
        Ok(self.naive_local().date())
    }

    fn original(&self) -> String {
        self.to_rfc3339()
    }
}

/// Split a date into year, abbreviated month, and day tokens.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` if `date` cannot be parsed into a valid
/// calendar date.
pub fn split_date_format<D: DateInput + ?Sized>(date: &D) -> Result<DateParts, CoreError> {
    let calendar = date.to_calendar_date()?;
    Ok(DateParts {
        original: date.original(),
        day: format!("{:02}", calendar.day()),
        month: calendar.format("%b").to_string(),
        year: format!("{:04}", calendar.year()),
    })
}

/// Long month name of `date` rendered in `locale` (e.g. `"enero"` for `es`).
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` on unparsable input and
/// `CoreError::UnsupportedLocale` if the locale tag is unknown.
pub fn month_long_name<D: DateInput + ?Sized>(date: &D, locale: &str) -> Result<String, CoreError> {
    ChronoLocales.long_month_name(date.to_calendar_date()?, locale)
}

/// Locale-aware date rendering.
pub trait LocaleEngine {
    /// Render `date` with a strftime `pattern` in `locale`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedLocale` for unknown locales and
    /// `CoreError::Validation` for malformed patterns.
    fn format_date(&self, date: NaiveDate, pattern: &str, locale: &str) -> Result<String, CoreError>;

    /// Long month name of `date` in `locale`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedLocale` for unknown locales.
    fn long_month_name(&self, date: NaiveDate, locale: &str) -> Result<String, CoreError> {
        self.format_date(date, "%B", locale)
    }
}

/// [`LocaleEngine`] backed by chrono's glibc-derived locale tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoLocales;

impl LocaleEngine for ChronoLocales {
    fn format_date(&self, date: NaiveDate, pattern: &str, locale: &str) -> Result<String, CoreError> {
        let locale = resolve_locale(locale)?;
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::Validation(format!("invalid date pattern '{pattern}'")));
        }

        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        let mut rendered = String::new();
        write!(rendered, "{}", midnight.format_localized(pattern, locale)).map_err(|_| {
            CoreError::Validation(format!("date pattern '{pattern}' cannot be rendered"))
        })?;
        Ok(rendered)
    }
}

/// Resolve a locale tag (`es`, `es_ES`, `es-es`) to a chrono locale.
///
/// A bare language resolves to its primary region.
///
/// # Errors
///
/// Returns `CoreError::UnsupportedLocale` if no locale table matches.
pub fn resolve_locale(tag: &str) -> Result<Locale, CoreError> {
    let unsupported = || CoreError::UnsupportedLocale {
        locale: tag.to_string(),
    };

    let normalized = tag.trim().replace('-', "_");
    if normalized.is_empty() {
        return Err(unsupported());
    }
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return Ok(locale);
    }

    let candidate = match normalized.split_once('_') {
        Some((language, region)) => format!(
            "{}_{}",
            language.to_ascii_lowercase(),
            region.to_ascii_uppercase()
        ),
        None => {
            let language = normalized.to_ascii_lowercase();
            primary_region(&language)
                .map_or_else(|| format!("{language}_{}", language.to_ascii_uppercase()), String::from)
        }
    };

    Locale::try_from(candidate.as_str()).map_err(|_| unsupported())
}

/// Languages whose primary locale is not `ll_LL`.
fn primary_region(language: &str) -> Option<&'static str> {
    match language {
        "en" => Some("en_US"),
        "ja" => Some("ja_JP"),
        "ko" => Some("ko_KR"),
        "zh" => Some("zh_CN"),
        "sv" => Some("sv_SE"),
        "da" => Some("da_DK"),
        "cs" => Some("cs_CZ"),
        "el" => Some("el_GR"),
        "uk" => Some("uk_UA"),
        "he" => Some("he_IL"),
        _ => None,
    }
}

fn parse_date_str(input: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = input.trim();
    let invalid = || CoreError::InvalidDate {
        input: input.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(zoned.naive_local().date());
    }
    if let Ok(zoned) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(zoned.naive_local().date());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    Err(invalid())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeDelta, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2020-01-05", "2020", "Jan", "05")]
    #[case("2021-12-31T23:59:59Z", "2021", "Dec", "31")]
    #[case("2021-12-31T23:30:00-05:00", "2021", "Dec", "31")]
    #[case("2019/07/04", "2019", "Jul", "04")]
    #[case("2018/Mar/09", "2018", "Mar", "09")]
    #[case("2017-08-15 08:30:00", "2017", "Aug", "15")]
    #[case("Tue, 1 Jul 2003 10:52:37 +0200", "2003", "Jul", "01")]
    #[case("  2024-02-29  ", "2024", "Feb", "29")]
    fn splits_textual_dates(
        #[case] input: &str,
        #[case] year: &str,
        #[case] month: &str,
        #[case] day: &str,
    ) {
        let parts = split_date_format(input).expect("valid date");
        assert_eq!(parts.year, year);
        assert_eq!(parts.month, month);
        assert_eq!(parts.day, day);
        assert_eq!(parts.original, input.trim());
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("2021-02-30")]
    #[case("2023-13-01")]
    #[case("2020/Foo/01")]
    fn rejects_invalid_dates(#[case] input: &str) {
        let error = split_date_format(input).expect_err("should fail");
        assert_eq!(
            error,
            CoreError::InvalidDate {
                input: input.to_string()
            }
        );
    }

    #[test]
    fn splits_typed_dates() {
        let date = NaiveDate::from_ymd_opt(2022, 11, 3).expect("date");
        let parts = split_date_format(&date).expect("split");
        assert_eq!(parts.original, "2022-11-03");
        assert_eq!((parts.year.as_str(), parts.month.as_str(), parts.day.as_str()), ("2022", "Nov", "03"));

        let offset = FixedOffset::east_opt(9 * 3600).expect("offset");
        let zoned = offset.with_ymd_and_hms(2022, 11, 3, 1, 0, 0).single().expect("zoned");
        let parts = split_date_format(&zoned).expect("split");
        assert_eq!(parts.day, "03", "local calendar date, not UTC");
    }

    #[test]
    fn split_parts_round_trip_to_same_date() {
        let start = NaiveDate::from_ymd_opt(1999, 12, 25).expect("date");
        for step in 0..400 {
            let date = start + TimeDelta::days(step * 17);
            let parts = split_date_format(&date).expect("split");
            let joined = format!("{}/{}/{}", parts.year, parts.month, parts.day);
            assert_eq!(joined.as_str().to_calendar_date().expect("reparse"), date);
            assert_eq!(parts.to_naive_date().expect("rebuild"), date);
        }
    }

    #[test]
    fn split_is_deterministic() {
        let now = Utc::now();
        assert_eq!(
            split_date_format(&now).expect("split"),
            split_date_format(&now).expect("split")
        );
    }

    #[rstest]
    #[case("2020-01-15", "es", "enero")]
    #[case("2020-03-01", "en_US", "March")]
    #[case("2020-03-01", "en", "March")]
    #[case("2020-03-01", "fr-FR", "mars")]
    #[case("2020-03-01", "de_de", "März")]
    fn long_month_names(#[case] date: &str, #[case] locale: &str, #[case] expected: &str) {
        assert_eq!(month_long_name(date, locale).expect("month name"), expected);
    }

    #[test]
    fn long_month_name_rejects_unknown_locale() {
        let error = month_long_name("2020-01-15", "xx_YY").expect_err("should fail");
        assert_eq!(
            error,
            CoreError::UnsupportedLocale {
                locale: "xx_YY".into()
            }
        );
        assert!(matches!(
            month_long_name("2020-01-15", ""),
            Err(CoreError::UnsupportedLocale { .. })
        ));
    }

    #[test]
    fn long_month_name_checks_date_first() {
        assert!(matches!(
            month_long_name("garbage", "xx_YY"),
            Err(CoreError::InvalidDate { .. })
        ));
    }

    #[test]
    fn format_date_rejects_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).expect("date");
        let error = ChronoLocales
            .format_date(date, "%Q", "en_US")
            .expect_err("should fail");
        assert!(matches!(error, CoreError::Validation(_)));
        assert_eq!(
            ChronoLocales.format_date(date, "%d %B %Y", "es").expect("format"),
            "01 enero 2020"
        );
    }
}
