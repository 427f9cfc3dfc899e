//! Due Date Handling
//!
//! Typing mask for `DD/MM/YYYY` input and conversion between the display
//! form and the canonical `YYYY-MM-DD` form used by the API.

use chrono::{Datelike, NaiveDate};

/// Day (2) + month (2) + year (4)
const MAX_DATE_DIGITS: usize = 8;

/// Reformat raw keystrokes into the `DD/MM/YYYY` typing mask.
///
/// Non-digits are dropped and at most eight digits are kept; separators are
/// inserted as the digit run grows, so `"3112"` becomes `"31/12"` and
/// `"31122026"` becomes `"31/12/2026"`.
pub fn normalize_date_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DATE_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Parse a `DD/MM/YYYY` display string into a calendar date.
///
/// Components may be short (`1/2/26` pads to `0026-02-01`). The padded
/// canonical string is parsed and the parsed date must give back exactly the
/// typed day, month and year, which rejects `31/02/2026` or `00/01/2026`.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    if [day, month, year].iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    if day.len() > 2 || month.len() > 2 || year.len() > 4 {
        return None;
    }

    let iso = format!("{:0>4}-{:0>2}-{:0>2}", year, month, day);
    let date = NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok()?;

    let (y, m, d): (i32, u32, u32) = (year.parse().ok()?, month.parse().ok()?, day.parse().ok()?);
    if date.year() != y || date.month() != m || date.day() != d {
        return None;
    }
    Some(date)
}

/// `DD/MM/YYYY` → `YYYY-MM-DD`, or `None` when the date is not valid
pub fn display_to_canonical(value: &str) -> Option<String> {
    parse_display_date(value).map(canonical_date)
}

/// `YYYY-MM-DD` → `DD/MM/YYYY`, or `None` when a component is missing
pub fn canonical_to_display(iso: &str) -> Option<String> {
    let (year, month, day) = split_canonical(iso)?;
    Some(format!("{}/{}/{}", day, month, year))
}

/// Value for a native `<input type="date">`, which already speaks `YYYY-MM-DD`
pub fn canonical_to_picker(iso: &str) -> Option<String> {
    let (year, month, day) = split_canonical(iso)?;
    Some(format!("{}-{}-{}", year, month, day))
}

/// Display form of a stored due date
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Canonical form of a stored due date
pub fn canonical_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn split_canonical(iso: &str) -> Option<(&str, &str, &str)> {
    let mut parts = iso.split('-');
    let year = parts.next().filter(|p| !p.is_empty())?;
    let month = parts.next().filter(|p| !p.is_empty())?;
    let day = parts.next().filter(|p| !p.is_empty())?;
    Some((year, month, day))
}
