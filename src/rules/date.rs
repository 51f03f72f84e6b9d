//! Jalali date rules: plain validity, date ranges, and year ranges.
//!
//! Range boundaries are part of the rule's configuration and are checked at
//! construction: a malformed boundary date or year is a programmer error and
//! raises [`Error`], while a malformed candidate value is an ordinary
//! validation failure.

use crate::{
    calendar,
    error::Error,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    separator::Separator,
    settings::GlobalSettings,
};

const DEFAULT_SEPARATOR: Separator = Separator::Slash;

/// Strips the separator out of a structurally valid date string and reads
/// the remaining digits as one number, e.g. `1403/02/01` → `1403 02 01` →
/// `14030201`. Range rules compare these cleaned numbers.
fn cleaned_number(value: &str, separator: Separator) -> Option<i64> {
    value.replace(separator.as_char(), "").parse().ok()
}

/// Validates a Jalali date string such as `1403/01/01` (zero padding in
/// month and day optional).
#[derive(Debug, Clone)]
pub struct PersianDate {
    separator: Separator,
    convert: bool,
    example: String,
}

impl PersianDate {
    /// Slash-separated dates, no numeral conversion.
    pub fn new() -> Self {
        Self::with_options("/", false, &GlobalSettings::default())
    }

    /// Unrecognized separators fall back to `/`.
    pub fn with_options(separator: &str, convert_persian_numbers: bool, settings: &GlobalSettings) -> Self {
        // resolve without an allow-list never fails
        let separator = Separator::resolve(separator, DEFAULT_SEPARATOR, None)
            .unwrap_or(DEFAULT_SEPARATOR);
        Self {
            separator,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
            example: calendar::date_example(separator),
        }
    }
}

impl Default for PersianDate {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PersianDate {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);
        Outcome::pass_when(
            calendar::parse_and_validate(&value, self.separator).is_some(),
            || Failure::new(keys::PERSIAN_DATE, attribute).with("example", self.example.clone()),
        )
    }
}

/// Validates that a Jalali date lies between two boundary dates. The
/// `or_equal` flag decides whether the boundaries themselves are accepted.
#[derive(Debug, Clone)]
pub struct PersianDateBetween {
    start_date: String,
    end_date: String,
    start_clean: i64,
    end_clean: i64,
    separator: Separator,
    convert: bool,
    or_equal: bool,
}

impl PersianDateBetween {
    /// Exclusive range with the default `/` separator.
    pub fn new(start_date: &str, end_date: &str) -> Result<Self, Error> {
        Self::with_options(start_date, end_date, "/", false, false, &GlobalSettings::default())
    }

    /// Inclusive range with the default `/` separator.
    pub fn new_or_equal(start_date: &str, end_date: &str) -> Result<Self, Error> {
        Self::with_options(start_date, end_date, "/", false, true, &GlobalSettings::default())
    }

    pub fn with_options(
        start_date: &str,
        end_date: &str,
        separator: &str,
        convert_persian_numbers: bool,
        or_equal: bool,
        settings: &GlobalSettings,
    ) -> Result<Self, Error> {
        let separator = Separator::resolve(separator, DEFAULT_SEPARATOR, None)
            .unwrap_or(DEFAULT_SEPARATOR);

        if calendar::parse_and_validate(start_date, separator).is_none() {
            return Err(Error::InvalidBoundaryDate(start_date.to_string()));
        }
        if calendar::parse_and_validate(end_date, separator).is_none() {
            return Err(Error::InvalidBoundaryDate(end_date.to_string()));
        }

        let start_clean = cleaned_number(start_date, separator)
            .ok_or_else(|| Error::InvalidBoundaryDate(start_date.to_string()))?;
        let end_clean = cleaned_number(end_date, separator)
            .ok_or_else(|| Error::InvalidBoundaryDate(end_date.to_string()))?;

        Ok(Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            start_clean,
            end_clean,
            separator,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
            or_equal,
        })
    }

    fn in_range(&self, cleaned: i64) -> bool {
        if self.or_equal {
            cleaned >= self.start_clean && cleaned <= self.end_clean
        } else {
            cleaned > self.start_clean && cleaned < self.end_clean
        }
    }

    fn failure(&self, attribute: &str) -> Failure {
        let key = if self.or_equal {
            keys::PERSIAN_DATE_BETWEEN_OR_EQUAL
        } else {
            keys::PERSIAN_DATE_BETWEEN
        };
        Failure::new(key, attribute)
            .with("startDate", self.start_date.clone())
            .with("endDate", self.end_date.clone())
    }
}

impl Rule for PersianDateBetween {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);

        let valid = calendar::parse_and_validate(&value, self.separator).is_some()
            && cleaned_number(&value, self.separator)
                .map(|cleaned| self.in_range(cleaned))
                .unwrap_or(false);

        Outcome::pass_when(valid, || self.failure(attribute))
    }
}

/// Validates that a Jalali date's year lies between two boundary years.
#[derive(Debug, Clone)]
pub struct PersianDateBetweenYear {
    start_year: i32,
    end_year: i32,
    separator: Separator,
    convert: bool,
    or_equal: bool,
}

impl PersianDateBetweenYear {
    /// Exclusive year range with the default `/` separator.
    pub fn new(start_year: &str, end_year: &str) -> Result<Self, Error> {
        Self::with_options(start_year, end_year, "/", false, false, &GlobalSettings::default())
    }

    /// Inclusive year range with the default `/` separator.
    pub fn new_or_equal(start_year: &str, end_year: &str) -> Result<Self, Error> {
        Self::with_options(start_year, end_year, "/", false, true, &GlobalSettings::default())
    }

    pub fn with_options(
        start_year: &str,
        end_year: &str,
        separator: &str,
        convert_persian_numbers: bool,
        or_equal: bool,
        settings: &GlobalSettings,
    ) -> Result<Self, Error> {
        if !calendar::is_valid_year(start_year) {
            return Err(Error::InvalidBoundaryYear(start_year.to_string()));
        }
        if !calendar::is_valid_year(end_year) {
            return Err(Error::InvalidBoundaryYear(end_year.to_string()));
        }

        let separator = Separator::resolve(separator, DEFAULT_SEPARATOR, None)
            .unwrap_or(DEFAULT_SEPARATOR);

        Ok(Self {
            // is_valid_year guarantees 4 plain digits
            start_year: start_year.parse().unwrap_or(calendar::YEAR_MIN),
            end_year: end_year.parse().unwrap_or(calendar::YEAR_MAX),
            separator,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
            or_equal,
        })
    }

    fn in_range(&self, year: i32) -> bool {
        if self.or_equal {
            year >= self.start_year && year <= self.end_year
        } else {
            year > self.start_year && year < self.end_year
        }
    }

    fn failure(&self, attribute: &str) -> Failure {
        let key = if self.or_equal {
            keys::PERSIAN_DATE_BETWEEN_OR_EQUAL_YEAR
        } else {
            keys::PERSIAN_DATE_BETWEEN_YEAR
        };
        Failure::new(key, attribute)
            .with("startYear", self.start_year.to_string())
            .with("endYear", self.end_year.to_string())
    }
}

impl Rule for PersianDateBetweenYear {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);

        let valid = calendar::parse_and_validate(&value, self.separator)
            .map(|date| self.in_range(date.year))
            .unwrap_or(false);

        Outcome::pass_when(valid, || self.failure(attribute))
    }
}
