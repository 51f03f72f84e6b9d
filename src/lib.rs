#![forbid(unsafe_code)]
//! Validators for Persian/Iranian data formats.
//!
//! Covers the Persian script (letters and numerals), the Jalali (Shamsi)
//! calendar, and the Iranian identifier formats: mobile and landline numbers,
//! postal codes, bank card numbers, IBAN (Sheba) numbers, national IDs
//! (Code Melli) and company IDs (Shenase Melli).
//!
//! # Quick Start
//!
//! ```rust
//! use persian_validation::{IranianNationalId, Rule};
//!
//! let rule = IranianNationalId::new();
//! assert!(rule.validate("national_id", "0013542419").is_pass());
//! assert!(rule.validate("national_id", "1234567890").is_fail());
//! ```
//!
//! Failures carry a stable message key and a placeholder map, ready for a
//! translation layer:
//!
//! ```rust
//! use persian_validation::{PersianDate, Rule, messages};
//!
//! let rule = PersianDate::new();
//! if let Some(failure) = rule.validate("birthday", "1402/12/30").failure() {
//!     let catalog = messages::catalog_for_str("en");
//!     let text = catalog.render(failure.key, &failure.placeholders);
//!     assert!(text.contains("must be a valid persian date"));
//! }
//! ```
//!
//! # Design
//!
//! - Every rule is a pure function of its configuration and the input value;
//!   rules hold only immutable data and can be shared freely across threads.
//! - Invalid *configuration* (an unknown format key, a separator outside an
//!   allow-list, a malformed range boundary) raises [`Error`] at
//!   construction. Invalid *data* never raises; it is reported through
//!   [`Outcome`].
//! - Persian and Arabic-Indic numerals are accepted wherever digits are,
//!   when enabled per rule or globally via [`GlobalSettings`].

pub mod calendar;
pub mod checksum;
pub mod error;
pub mod messages;
pub mod numerals;
pub mod outcome;
pub mod rules;
pub mod separator;
pub mod settings;

// Re-export the most used types for easy consumption
pub use crate::{
    error::Error,
    outcome::{Failure, Outcome, Placeholders, Rule, RuleKind},
    rules::{
        IranianBankCardNumber, IranianCompanyId, IranianIban, IranianMobile, IranianNationalId,
        IranianPhone, IranianPhoneAreaCode, IranianPostalCode, PersianAlpha, PersianAlphaEngNum,
        PersianAlphaNum, PersianDate, PersianDateBetween, PersianDateBetweenYear, PersianDay,
        PersianMonth, PersianNotAccept, PersianNumber,
    },
    separator::Separator,
    settings::GlobalSettings,
};
