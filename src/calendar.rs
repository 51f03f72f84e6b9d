//! Jalali (Shamsi) calendar arithmetic and date parsing.
//!
//! The Jalali year is validated against the 33-year leap cycle: a year is a
//! leap year iff `year % 33` is one of `{1, 5, 9, 13, 17, 22, 26, 30}`.
//! Months 1–6 have 31 days, months 7–11 have 30, and month 12 has 29 (30 in
//! leap years). Accepted years lie in [`YEAR_MIN`]..=[`YEAR_MAX`].
//!
//! Gregorian→Jalali conversion is deliberately out of scope; only the year
//! estimation needed to render a "today" example string is provided.

use std::collections::HashMap;

use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::Regex;

use crate::separator::Separator;

/// Lower bound (inclusive) of the accepted Jalali year range.
pub const YEAR_MIN: i32 = 1000;
/// Upper bound (inclusive) of the accepted Jalali year range.
pub const YEAR_MAX: i32 = 1600;

const LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

lazy_static! {
    /// One compiled date pattern per separator. Year is exactly 4 digits,
    /// month and day are 1–2 digits with optional zero padding.
    static ref DATE_PATTERNS: HashMap<Separator, Regex> = {
        let mut m = HashMap::new();
        for sep in [
            Separator::Slash,
            Separator::Pipe,
            Separator::Dash,
            Separator::Underscore,
            Separator::Star,
            Separator::Dot,
            Separator::Comma,
            Separator::Space,
        ] {
            let s = sep.pattern();
            let pattern = format!(
                r"^(1[0-9]{{3}}){s}(0?[1-9]|1[0-2]){s}(0?[1-9]|[12][0-9]|3[01])$"
            );
            m.insert(sep, Regex::new(&pattern).unwrap());
        }
        m
    };

    static ref YEAR_PATTERN: Regex = Regex::new(r"^1[0-9]{3}$").unwrap();
}

/// A transient Jalali calendar date. Created and discarded within a single
/// validation call; carries no persisted identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Checks year range, month range, and day against the month's length.
    /// All three must hold; there is no partial credit.
    pub fn is_valid(&self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }
}

/// Returns true iff the given Jalali year is a leap year per the 33-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    LEAP_REMAINDERS.contains(&year.rem_euclid(33))
}

/// Number of days in a Jalali month. Returns 0 for an out-of-range month.
pub fn days_in_month(month: u32, leap: bool) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => {
            if leap {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

/// Validates a `(year, month, day)` triple against the Jalali calendar rules
/// and the accepted year range.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= days_in_month(month, is_leap_year(year))
}

/// Parses `YYYY<sep>M(M)<sep>D(D)` into a [`JalaliDate`] without validating
/// calendar rules beyond the structural pattern. Returns `None` on a
/// structural mismatch.
pub fn parse_date(value: &str, separator: Separator) -> Option<JalaliDate> {
    let caps = DATE_PATTERNS[&separator].captures(value)?;
    // The pattern constrains every group to plain ASCII digits.
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    Some(JalaliDate::new(year, month, day))
}

/// Parses and fully validates a Jalali date string.
pub fn parse_and_validate(value: &str, separator: Separator) -> Option<JalaliDate> {
    parse_date(value, separator).filter(JalaliDate::is_valid)
}

/// Returns true iff `value` is a 4-digit year inside the accepted range.
pub fn is_valid_year(value: &str) -> bool {
    if !YEAR_PATTERN.is_match(value) {
        return false;
    }
    value
        .parse::<i32>()
        .map(|year| (YEAR_MIN..=YEAR_MAX).contains(&year))
        .unwrap_or(false)
}

/// Estimates the Jalali year for a Gregorian date. Dates before the Persian
/// new year (roughly March 21) map to `gregorian_year - 622`, later dates to
/// `gregorian_year - 621`. This is an estimation for example generation, not
/// a calendar conversion.
pub fn estimate_persian_year(gregorian_year: i32, month: u32, day: u32) -> i32 {
    if month < 3 || (month == 3 && day < 21) {
        gregorian_year - 622
    } else {
        gregorian_year - 621
    }
}

/// Builds a first-of-Farvardin example string for the current Jalali year,
/// e.g. `1404/01/01`, using the given separator in its literal form.
pub fn date_example(separator: Separator) -> String {
    let today = Local::now().date_naive();
    let year = estimate_persian_year(today.year(), today.month(), today.day());
    let sep = separator.as_char();
    format!("{year}{sep}01{sep}01")
}
