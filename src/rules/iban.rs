//! Iranian IBAN (Sheba) rule.
//!
//! An Iranian IBAN is `IR` + 24 digits: two check digits, three bank digits,
//! nineteen account digits. The rule accepts the number with or without the
//! country prefix and optionally grouped (`IR06 2960 0000 0010 0324 2000 01`);
//! the MOD-97 check always folds in Iran's country value regardless of
//! whether the prefix was present.

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
    static ref IBAN_WITH_PREFIX: Regex =
        Regex::new(r"^IR[0-9]{2}(?:[0-9]{4}){5}[0-9]{2}$").unwrap();
    static ref IBAN_WITHOUT_PREFIX: Regex =
        Regex::new(r"^[0-9]{2}(?:[0-9]{4}){5}[0-9]{2}$").unwrap();
}

/// Validates an Iranian IBAN with the MOD-97 check.
#[derive(Debug, Clone)]
pub struct IranianIban {
    pattern: Option<Regex>,
    separator: Option<Separator>,
    with_prefix: bool,
    convert: bool,
}

impl IranianIban {
    /// `IR`-prefixed, ungrouped.
    pub fn new() -> Self {
        Self {
            pattern: None,
            separator: None,
            with_prefix: true,
            convert: false,
        }
    }

    /// 24 digits without the country prefix.
    pub fn without_prefix() -> Self {
        Self {
            with_prefix: false,
            ..Self::new()
        }
    }

    /// Grouped form; unrecognized separators fall back to a space.
    pub fn with_separator(separator: &str) -> Result<Self, Error> {
        Self::with_options(true, Some(separator), false, &GlobalSettings::default())
    }

    pub fn with_options(
        with_prefix: bool,
        separator: Option<&str>,
        convert_persian_numbers: bool,
        settings: &GlobalSettings,
    ) -> Result<Self, Error> {
        let separator = separator
            .map(|s| Separator::resolve(s, Separator::Space, None))
            .transpose()?;
        let pattern = separator
            .map(|sep| {
                let s = sep.pattern();
                let prefix = if with_prefix { "IR" } else { "" };
                Regex::new(&format!(
                    "^{prefix}[0-9]{{2}}(?:{s}[0-9]{{4}}){{5}}{s}[0-9]{{2}}$"
                ))
            })
            .transpose()?;

        Ok(Self {
            pattern,
            separator,
            with_prefix,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        })
    }

    fn structurally_valid(&self, value: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(value),
            None if self.with_prefix => IBAN_WITH_PREFIX.is_match(value),
            None => IBAN_WITHOUT_PREFIX.is_match(value),
        }
    }
}

impl Default for IranianIban {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IranianIban {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);

        let valid = self.structurally_valid(&value) && {
            let ungrouped = match self.separator {
                Some(sep) => value.replace(sep.as_char(), ""),
                None => value,
            };
            checksum::iban_mod97(&ungrouped)
        };

        Outcome::pass_when(valid, || {
            match self.separator {
                Some(sep) => Failure::new(keys::IR_IBAN_WITH_SEPARATOR, attribute)
                    .with("separator", sep.literal()),
                None => Failure::new(keys::IR_IBAN, attribute),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(rule: &IranianIban, value: &str) -> bool {
        rule.validate("sheba", value).is_pass()
    }

    #[test]
    fn test_with_prefix() {
        let rule = IranianIban::new();
        assert!(passes(&rule, "IR062960000000100324200001"));
        assert!(!passes(&rule, "IR062960000000100324200002")); // check digits off
        assert!(!passes(&rule, "062960000000100324200001")); // prefix required
    }

    #[test]
    fn test_without_prefix() {
        let rule = IranianIban::without_prefix();
        assert!(passes(&rule, "062960000000100324200001"));
        assert!(!passes(&rule, "IR062960000000100324200001"));
        assert!(!passes(&rule, "062960000000100324200002"));
    }

    #[test]
    fn test_prefix_round_trip_same_remainder() {
        // Both forms of the same account must agree.
        let prefixed = IranianIban::new();
        let bare = IranianIban::without_prefix();
        assert_eq!(
            passes(&prefixed, "IR062960000000100324200001"),
            passes(&bare, "062960000000100324200001"),
        );
    }

    #[test]
    fn test_bad_shapes_rejected() {
        let rule = IranianIban::new();
        for value in [
            "IR06296000000010032420000",   // 23 digits
            "IR0629600000001003242000011", // 25 digits
            "GB062960000000100324200001",  // wrong country
            "IR06 2960 0000 0010 0324 2000 01", // grouping without separator config
            "",
        ] {
            assert!(!passes(&rule, value), "{value} must fail");
        }
    }

    #[test]
    fn test_with_separator() {
        let rule = IranianIban::with_separator("space").unwrap();
        assert!(passes(&rule, "IR06 2960 0000 0010 0324 2000 01"));
        assert!(!passes(&rule, "IR062960000000100324200001"));

        let dashed = IranianIban::with_separator("-").unwrap();
        assert!(passes(&dashed, "IR06-2960-0000-0010-0324-2000-01"));
        assert!(!passes(&dashed, "IR06-2960-0000-0010-0324-2000-02"));
    }

    #[test]
    fn test_with_separator_without_prefix() {
        let rule =
            IranianIban::with_options(false, Some("-"), false, &GlobalSettings::default())
                .unwrap();
        assert!(passes(&rule, "06-2960-0000-0010-0324-2000-01"));
        assert!(!passes(&rule, "IR06-2960-0000-0010-0324-2000-01"));
    }

    #[test]
    fn test_failure_keys() {
        let plain = IranianIban::new();
        assert_eq!(plain.validate("sheba", "x").failure().unwrap().key, "ir_iban");

        let grouped = IranianIban::with_separator("space").unwrap();
        let outcome = grouped.validate("sheba", "x");
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.key, "ir_iban_with_separator");
        assert_eq!(failure.placeholders["separator"], "space");
    }

    #[test]
    fn test_persian_numeral_conversion() {
        let rule =
            IranianIban::with_options(true, None, true, &GlobalSettings::default()).unwrap();
        assert!(passes(&rule, "IR۰۶۲۹۶۰۰۰۰۰۰۰۱۰۰۳۲۴۲۰۰۰۰۱"));
    }
}
