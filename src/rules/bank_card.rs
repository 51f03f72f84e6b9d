//! Iranian bank card rule.
//!
//! Sixteen digits: six BIN digits (all issued Iranian BINs start with 2, 5,
//! 6 or 9), nine account digits, and a Luhn check digit. Grouped input
//! (`6037-9975-9942-2129`) is accepted when a separator is configured.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    checksum,
    error::Error,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    separator::Separator,
    settings::GlobalSettings,
};

lazy_static! {
    static ref CARD_NUMBER: Regex = Regex::new(r"^[2569][0-9]{15}$").unwrap();
}

/// Validates an Iranian bank card number with the Luhn check.
#[derive(Debug, Clone)]
pub struct IranianBankCardNumber {
    pattern: Option<Regex>,
    separator: Option<Separator>,
    convert: bool,
}

impl IranianBankCardNumber {
    /// Sixteen contiguous digits.
    pub fn new() -> Self {
        Self {
            pattern: None,
            separator: None,
            convert: false,
        }
    }

    /// Requires `4×4` grouping with the given separator; unrecognized
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
            .map(|sep| {
                let s = sep.pattern();
                Regex::new(&format!(
                    "^[2569][0-9]{{3}}{s}[0-9]{{4}}{s}[0-9]{{4}}{s}[0-9]{{4}}$"
                ))
            })
            .transpose()?;

        Ok(Self {
            pattern,
            separator,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        })
    }
}

impl Default for IranianBankCardNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IranianBankCardNumber {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);

        let valid = match (&self.pattern, self.separator) {
            (Some(pattern), Some(sep)) => {
                pattern.is_match(&value)
                    && checksum::luhn16(&value.replace(sep.as_char(), ""))
            }
            _ => CARD_NUMBER.is_match(&value) && checksum::luhn16(&value),
        };

        Outcome::pass_when(valid, || {
            match self.separator {
                Some(sep) => Failure::new(keys::IR_BANK_CARD_NUMBER_WITH_SEPARATOR, attribute)
                    .with("separator", sep.literal()),
                None => Failure::new(keys::IR_BANK_CARD_NUMBER, attribute),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(rule: &IranianBankCardNumber, value: &str) -> bool {
        rule.validate("card_number", value).is_pass()
    }

    #[test]
    fn test_valid_card_numbers() {
        let rule = IranianBankCardNumber::new();
        assert!(passes(&rule, "6037997599422129"));
        assert!(passes(&rule, "5022291070873466"));
    }

    #[test]
    fn test_luhn_mismatch_rejected() {
        let rule = IranianBankCardNumber::new();
        assert!(!passes(&rule, "6037997599439129"));
        assert!(!passes(&rule, "6037997599422128"));
    }

    #[test]
    fn test_bin_start_digits() {
        let rule = IranianBankCardNumber::new();
        // Valid Luhn but a leading digit outside the issued BIN ranges
        assert!(!passes(&rule, "1037997599422120"));
        assert!(!passes(&rule, "4037997599422124"));
    }

    #[test]
    fn test_bad_shapes_rejected() {
        let rule = IranianBankCardNumber::new();
        for value in [
            "603799759942212",
            "60379975994221290",
            "603799759942212a",
            "6037-9975-9942-2129",
            "",
        ] {
            assert!(!passes(&rule, value), "{value} must fail");
        }
    }

    #[test]
    fn test_with_separator() {
        let rule = IranianBankCardNumber::with_separator("-").unwrap();
        assert!(passes(&rule, "6037-9975-9942-2129"));
        assert!(!passes(&rule, "6037997599422129"));
        assert!(!passes(&rule, "6037-9975-9942-2128")); // Luhn mismatch

        let spaced = IranianBankCardNumber::with_separator("space").unwrap();
        assert!(passes(&spaced, "6037 9975 9942 2129"));
        assert!(!passes(&spaced, "6037-9975-9942-2129"));
    }

    #[test]
    fn test_failure_keys() {
        let plain = IranianBankCardNumber::new();
        assert_eq!(
            plain.validate("card", "x").failure().unwrap().key,
            "ir_bank_card_number"
        );

        let grouped = IranianBankCardNumber::with_separator("-").unwrap();
        let outcome = grouped.validate("card", "x");
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.key, "ir_bank_card_number_with_separator");
        assert_eq!(failure.placeholders["separator"], "-");
    }

    #[test]
    fn test_persian_numeral_conversion() {
        let rule =
            IranianBankCardNumber::with_options(None, true, &GlobalSettings::default()).unwrap();
        assert!(passes(&rule, "۶۰۳۷۹۹۷۵۹۹۴۲۲۱۲۹"));
    }
}
