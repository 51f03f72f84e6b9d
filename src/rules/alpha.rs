//! Persian script rules: letters, numerals, and the rejection rule.
//!
//! The letter classes are built on the `Arabic` Unicode script (which covers
//! the Persian alphabet and its diacritics) plus ZWNJ, whitespace, and the
//! Persian punctuation marks. Note that the script class also contains the
//! Persian and Arabic-Indic digits, which is why [`PersianAlpha`] needs an
//! explicit digit-rejection pass.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    messages::keys,
    outcome::{Failure, Outcome, Rule},
};

lazy_static! {
    static ref PERSIAN_TEXT: Regex =
        Regex::new(r"^[\p{Arabic}\x{200C}\s،؛؟!٬٫()«»٪]+$").unwrap();
    static ref ANY_DIGIT: Regex = Regex::new(r"[0-9۰-۹٠-٩]").unwrap();
    static ref PERSIAN_TEXT_WITH_ASCII_DIGITS: Regex =
        Regex::new(r"^[\p{Arabic}\x{200C}\s0-9،؛؟!٬٫()«»٪]+$").unwrap();
    static ref PERSIAN_DIGITS_ONLY: Regex = Regex::new(r"^[۰-۹٠-٩]+$").unwrap();
    static ref ANY_PERSIAN: Regex = Regex::new(r"[\p{Arabic}\x{200C}،٫«»٪]").unwrap();
}

/// Accepts Persian letters, diacritics, ZWNJ, punctuation and spaces; rejects
/// any digit in any script.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianAlpha;

impl PersianAlpha {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PersianAlpha {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(
            PERSIAN_TEXT.is_match(value) && !ANY_DIGIT.is_match(value),
            || Failure::new(keys::PERSIAN_ALPHA, attribute),
        )
    }
}

/// Accepts Persian letters and Persian/Arabic-Indic numerals (plus ZWNJ,
/// punctuation and spaces). ASCII digits are not accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianAlphaNum;

impl PersianAlphaNum {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PersianAlphaNum {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(PERSIAN_TEXT.is_match(value), || {
            Failure::new(keys::PERSIAN_ALPHA_NUM, attribute)
        })
    }
}

/// Accepts Persian letters with either Persian or ASCII numerals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianAlphaEngNum;

impl PersianAlphaEngNum {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PersianAlphaEngNum {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(PERSIAN_TEXT_WITH_ASCII_DIGITS.is_match(value), || {
            Failure::new(keys::PERSIAN_ALPHA_ENG_NUM, attribute)
        })
    }
}

/// Accepts Persian or Arabic-Indic numerals only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianNumber;

impl PersianNumber {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PersianNumber {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(PERSIAN_DIGITS_ONLY.is_match(value), || {
            Failure::new(keys::PERSIAN_NUM, attribute)
        })
    }
}

/// Rejects any Persian-range character anywhere in the value: letters,
/// diacritics, ZWNJ, Persian punctuation. The empty string passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianNotAccept;

impl PersianNotAccept {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PersianNotAccept {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(!ANY_PERSIAN.is_match(value), || {
            Failure::new(keys::PERSIAN_NOT_ACCEPT, attribute)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(rule: &impl Rule, value: &str) -> bool {
        rule.validate("field", value).is_pass()
    }

    #[test]
    fn test_persian_alpha_accepts_letters_and_zwnj() {
        let rule = PersianAlpha::new();
        assert!(passes(&rule, "سلام"));
        assert!(passes(&rule, "سَلام"));
        assert!(passes(&rule, "سلام خوبی"));
        assert!(passes(&rule, "می‌روم"));
    }

    #[test]
    fn test_persian_alpha_rejects_digits_any_script() {
        let rule = PersianAlpha::new();
        assert!(!passes(&rule, "سلام123"));
        assert!(!passes(&rule, "سلام۱۲۳"));
        assert!(!passes(&rule, "سلام٣"));
        assert!(!passes(&rule, "hello"));
        assert!(!passes(&rule, ""));
    }

    #[test]
    fn test_persian_alpha_num_accepts_persian_digits() {
        let rule = PersianAlphaNum::new();
        assert!(passes(&rule, "سلام۱۲۳"));
        assert!(passes(&rule, "سلام ۱۲۳"));
        assert!(passes(&rule, "می‌روم۴۵۶"));
        assert!(!passes(&rule, "سلام123"));
        assert!(!passes(&rule, "hello"));
    }

    #[test]
    fn test_persian_alpha_eng_num_accepts_both_digit_scripts() {
        let rule = PersianAlphaEngNum::new();
        assert!(passes(&rule, "سلام123"));
        assert!(passes(&rule, "سلام ۱۲۳ 456"));
        assert!(!passes(&rule, "Hello سلام"));
    }

    #[test]
    fn test_persian_number() {
        let rule = PersianNumber::new();
        assert!(passes(&rule, "۱۲۳۴۵"));
        assert!(passes(&rule, "٠١٢٣٤"));
        assert!(!passes(&rule, "12345"));
        assert!(!passes(&rule, "۱۲a۳۴"));
        assert!(!passes(&rule, "۱۲ ۳۴"));
        assert!(!passes(&rule, ""));
    }

    #[test]
    fn test_persian_not_accept() {
        let rule = PersianNotAccept::new();
        assert!(passes(&rule, "Hello World"));
        assert!(passes(&rule, "123456"));
        assert!(passes(&rule, ""));
        assert!(!passes(&rule, "سلام"));
        assert!(!passes(&rule, "Hello سلام"));
        assert!(!passes(&rule, "۱۲۳۴۵۶"));
    }

    #[test]
    fn test_failure_keys() {
        assert_eq!(
            PersianAlpha::new()
                .validate("name", "abc")
                .failure()
                .unwrap()
                .key,
            "persian_alpha"
        );
        assert_eq!(
            PersianNumber::new()
                .validate("count", "abc")
                .failure()
                .unwrap()
                .key,
            "persian_num"
        );
    }
}
