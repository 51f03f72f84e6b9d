//! Iranian national ID (Code Melli) rule.
//!
//! Ten digits with a weighted mod-11 check digit. IDs issued in regions with
//! leading zeros are often written with 8 or 9 digits; those are left-padded
//! back to 10 before checking.

use crate::{
    checksum,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    settings::GlobalSettings,
};

/// Validates an Iranian national ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct IranianNationalId {
    convert: bool,
}

impl IranianNationalId {
    pub fn new() -> Self {
        Self { convert: false }
    }

    pub fn with_options(convert_persian_numbers: bool, settings: &GlobalSettings) -> Self {
        Self {
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        }
    }
}

impl Rule for IranianNationalId {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);

        let padded = if (8..10).contains(&value.len()) {
            format!("{value:0>10}")
        } else {
            value
        };

        Outcome::pass_when(checksum::national_id(&padded), || {
            Failure::new(keys::IR_NATIONAL_ID, attribute)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(rule: &IranianNationalId, value: &str) -> bool {
        rule.validate("national_id", value).is_pass()
    }

    #[test]
    fn test_valid_ids() {
        let rule = IranianNationalId::new();
        assert!(passes(&rule, "0013542419"));
        assert!(passes(&rule, "0499370899"));
    }

    #[test]
    fn test_short_ids_are_zero_padded() {
        let rule = IranianNationalId::new();
        // 0013542419 written without its leading zeros
        assert!(passes(&rule, "13542419"));
        assert!(passes(&rule, "013542419"));
    }

    #[test]
    fn test_invalid_check_digit() {
        let rule = IranianNationalId::new();
        assert!(!passes(&rule, "1234567890"));
        assert!(!passes(&rule, "0013542418"));
    }

    #[test]
    fn test_repeated_digits_always_fail() {
        let rule = IranianNationalId::new();
        for d in 0..=9u8 {
            let value: String = std::iter::repeat_n(char::from(b'0' + d), 10).collect();
            assert!(!passes(&rule, &value), "{value} must fail");
        }
    }

    #[test]
    fn test_bad_shapes_rejected() {
        let rule = IranianNationalId::new();
        for value in ["1354241", "00135424199", "00135a2419", "", "abc"] {
            assert!(!passes(&rule, value), "{value} must fail");
        }
    }

    #[test]
    fn test_persian_numeral_conversion() {
        let rule = IranianNationalId::with_options(true, &GlobalSettings::default());
        assert!(passes(&rule, "۰۰۱۳۵۴۲۴۱۹"));

        let strict = IranianNationalId::new();
        assert!(!passes(&strict, "۰۰۱۳۵۴۲۴۱۹"));
    }

    #[test]
    fn test_failure_key() {
        let rule = IranianNationalId::new();
        let outcome = rule.validate("code_melli", "123");
        assert_eq!(outcome.failure().unwrap().key, "ir_national_id");
    }
}
