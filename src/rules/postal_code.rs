//! Iranian postal code rule.
//!
//! Ten digits: five for the region (the leading block never contains `0` or
//! `2`) and five for the delivery point, optionally separated as
//! `12345-67890`. Codes whose first four digits repeat a single digit are
//! reserved and rejected.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    separator::Separator,
    settings::GlobalSettings,
};

lazy_static! {
    /// Default shape: separator optional.
    static ref POSTAL_CODE: Regex = Regex::new(r"^[13-9]{5}-?[0-9]{5}$").unwrap();
}

/// Validates an Iranian postal code (Code Posti).
#[derive(Debug, Clone)]
pub struct IranianPostalCode {
    pattern: Option<Regex>,
    separator: Option<Separator>,
    convert: bool,
}

impl IranianPostalCode {
    /// Ten digits with an optional dash between the halves.
    pub fn new() -> Self {
        Self {
            pattern: None,
            separator: None,
            convert: false,
        }
    }

    /// Requires the given separator between the halves; unrecognized
    /// separators fall back to `-`.
    pub fn with_separator(separator: &str) -> Result<Self, Error> {
        Self::with_options(Some(separator), false, &GlobalSettings::default())
    }

    pub fn with_options(
        separator: Option<&str>,
        convert_persian_numbers: bool,
        settings: &GlobalSettings,
    ) -> Result<Self, Error> {
        let separator = separator
            .map(|s| Separator::resolve(s, Separator::Dash, None))
            .transpose()?;
        let pattern = separator
            .map(|sep| Regex::new(&format!("^[13-9]{{5}}{}[0-9]{{5}}$", sep.pattern())))
            .transpose()?;

        Ok(Self {
            pattern,
            separator,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        })
    }

    fn structurally_valid(&self, value: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(value),
            None => POSTAL_CODE.is_match(value),
        }
    }
}

impl Default for IranianPostalCode {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IranianPostalCode {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);

        // Reserved block: first four digits all identical.
        let repeated_leading = || {
            let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
            digits.len() >= 4 && digits[..4].iter().all(|&c| c == digits[0])
        };

        let valid = self.structurally_valid(&value) && !repeated_leading();

        Outcome::pass_when(valid, || {
            match self.separator {
                Some(sep) => Failure::new(keys::IR_POSTAL_CODE_WITH_SEPARATOR, attribute)
                    .with("separator", sep.literal()),
                None => Failure::new(keys::IR_POSTAL_CODE, attribute),
            }
        })
    }
}
