//! Week-day and month name rules.
//!
//! Both rules check exact membership in a name list. The list comes from a
//! [`NameSource`] so hosts can supply translated names; the default is the
//! canonical Persian list (Saturday-first, Farvardin-first).

use crate::{
    messages::{BuiltinNames, NameSource, keys},
    outcome::{Failure, Outcome, Rule},
};

/// Validates a Persian week-day name (شنبه .. جمعه).
#[derive(Debug, Clone)]
pub struct PersianDay {
    days: Vec<String>,
}

impl PersianDay {
    pub fn new() -> Self {
        Self::with_source(&BuiltinNames)
    }

    pub fn with_source(source: &dyn NameSource) -> Self {
        Self {
            days: source.week_days(),
        }
    }
}

impl Default for PersianDay {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PersianDay {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(self.days.iter().any(|day| day == value), || {
            Failure::new(keys::PERSIAN_DAY, attribute).with("days", self.days.join(", "))
        })
    }
}

/// Validates a Persian month name (فروردین .. اسفند).
#[derive(Debug, Clone)]
pub struct PersianMonth {
    months: Vec<String>,
}

impl PersianMonth {
    pub fn new() -> Self {
        Self::with_source(&BuiltinNames)
    }

    pub fn with_source(source: &dyn NameSource) -> Self {
        Self {
            months: source.months(),
        }
    }
}

impl Default for PersianMonth {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PersianMonth {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        Outcome::pass_when(self.months.iter().any(|month| month == value), || {
            Failure::new(keys::PERSIAN_MONTH, attribute).with("months", self.months.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::catalog_for_str;

    #[test]
    fn test_persian_day_accepts_all_seven() {
        let rule = PersianDay::new();
        for day in [
            "شنبه",
            "یکشنبه",
            "دوشنبه",
            "سه‌شنبه",
            "چهارشنبه",
            "پنج‌شنبه",
            "جمعه",
        ] {
            assert!(rule.validate("day", day).is_pass(), "{day} must pass");
        }
    }

    #[test]
    fn test_persian_day_rejects_others() {
        let rule = PersianDay::new();
        assert!(rule.validate("day", "Saturday").is_fail());
        assert!(rule.validate("day", "شنبه ").is_fail()); // trailing space
        assert!(rule.validate("day", "سه شنبه").is_fail()); // plain space, not ZWNJ
        assert!(rule.validate("day", "").is_fail());
    }

    #[test]
    fn test_persian_day_failure_lists_days() {
        let rule = PersianDay::new();
        let outcome = rule.validate("day", "nope");
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.key, "persian_day");
        assert!(failure.placeholders["days"].contains("جمعه"));
    }

    #[test]
    fn test_persian_day_with_injected_source() {
        // The English catalog doubles as a transliterated name source.
        let rule = PersianDay::with_source(catalog_for_str("en"));
        assert!(rule.validate("day", "Shanbe").is_pass());
        assert!(rule.validate("day", "شنبه").is_fail());
    }

    #[test]
    fn test_persian_month_accepts_all_twelve() {
        let rule = PersianMonth::new();
        for month in [
            "فروردین",
            "اردیبهشت",
            "خرداد",
            "تیر",
            "مرداد",
            "شهریور",
            "مهر",
            "آبان",
            "آذر",
            "دی",
            "بهمن",
            "اسفند",
        ] {
            assert!(rule.validate("month", month).is_pass(), "{month} must pass");
        }
    }

    #[test]
    fn test_persian_month_rejects_others() {
        let rule = PersianMonth::new();
        assert!(rule.validate("month", "January").is_fail());
        assert!(rule.validate("month", "فروردین ").is_fail());
        assert!(rule.validate("month", "").is_fail());
    }

    #[test]
    fn test_persian_month_with_injected_source() {
        let rule = PersianMonth::with_source(catalog_for_str("en"));
        assert!(rule.validate("month", "Farvardin").is_pass());
        assert!(rule.validate("month", "Esfand").is_pass());
    }
}
