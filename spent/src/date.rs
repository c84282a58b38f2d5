use crate::{Error, Result};

use std::borrow::Cow;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime};
use regex::Regex;

/// Textual form dates are stored under
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Textual form dates are listed under, e.g. `05-Mar-2024`
pub const DISPLAY_FORMAT: &str = "%d-%b-%Y";

/// Date formats tried in order, each one with `%y` before `%Y`
///
/// `%Y` reads `24` as the year 24, hence the two-digit variant first. A
/// two-digit match leaving the rest of a four-digit year behind is rejected
/// as the remainder is not a time. Year-first formats come last as `%Y`
/// reads `03` as the year 3. Month-first wins over day-first when both are
/// possible. Commas are dropped before matching.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%a %b %d %Y",
    "%a %d %b %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
];

/// Time of day allowed after the date, ignored
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Formats without a year, completed with the current one
const YEARLESS_FORMATS: &[&str] = &["%b %d", "%d %b", "%a %b %d", "%a %d %b", "%m/%d"];

/// Parse human-entered date text into a calendar date
///
/// A missing year is the current one.
pub fn parse(text: &str) -> Result<NaiveDate> {
    parse_in_year(text, Local::now().year())
}

fn parse_in_year(text: &str, year: i32) -> Result<NaiveDate> {
    let text = text.trim();
    let cleaned = clean(text)?;

    for format in candidates() {
        if let Ok((date, rest)) = NaiveDate::parse_and_remainder(&cleaned, &format) {
            let matched = &cleaned[..cleaned.len() - rest.len()];
            if same_shape(&format, matched) && is_time(rest) {
                log::debug!("Parsed date {text:?} with {format:?}");
                return Ok(date);
            }
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(text) {
        return Ok(datetime.date_naive());
    }

    let with_year = format!("{cleaned}|{year}");
    for format in YEARLESS_FORMATS {
        if !same_shape(format, &cleaned) {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(&with_year, &format!("{format}|%Y")) {
            log::debug!("Parsed date {text:?} with {format:?} in {year}");
            return Ok(date);
        }
    }

    Err(Error::DateParse(text.to_owned()))
}

fn candidates() -> impl Iterator<Item = Cow<'static, str>> {
    DATE_FORMATS.iter().flat_map(|format| {
        let short = format
            .contains("%Y")
            .then(|| Cow::Owned(format.replace("%Y", "%y")));
        short.into_iter().chain(std::iter::once(Cow::Borrowed(*format)))
    })
}

/// Drop commas and ordinal suffixes, collapse whitespace
fn clean(text: &str) -> Result<String> {
    let ordinal = Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b")
        .map_err(|e| Error::Invalid(e.to_string()))?;
    let text = text.replace(',', " ");

    Ok(ordinal
        .replace_all(&text, "${1}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" "))
}

/// As many words in the text as in the format
///
/// A space in a format also matches no space at all, `%b %d %Y` would
/// otherwise read `March 2024` as the 20th of March of the year 24.
fn same_shape(format: &str, text: &str) -> bool {
    format.split_whitespace().count() == text.split_whitespace().count()
}

fn is_time(rest: &str) -> bool {
    let rest = rest.trim();
    let rest = rest.strip_prefix('T').unwrap_or(rest);

    rest.is_empty()
        || TIME_FORMATS
            .iter()
            .any(|format| NaiveTime::parse_from_str(rest, format).is_ok())
}

pub fn to_canonical(date: &NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

pub fn to_display(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn from_canonical(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, CANONICAL_FORMAT)
        .map_err(|_| Error::DateParse(text.to_owned()))
}
