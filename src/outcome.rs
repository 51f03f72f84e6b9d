//! Validation outcomes and the uniform rule contract.
//!
//! A rule either passes or fails with a message key and a placeholder map;
//! there is no partial or warning state, and a failing value is never an
//! error; configuration mistakes are the only thing that raises
//! [`crate::error::Error`].

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

use crate::{error::Error, messages::keys};

/// Placeholder name → display value, e.g. `example` → `09123456789`.
pub type Placeholders = BTreeMap<&'static str, String>;

/// A structured validation failure: a stable message key plus the
/// placeholders its message template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub key: &'static str,
    pub placeholders: Placeholders,
}

impl Failure {
    /// Creates a failure for `key`, seeding the placeholder map with the
    /// attribute name (every template may reference `:attribute`).
    pub fn new(key: &'static str, attribute: &str) -> Self {
        let mut placeholders = BTreeMap::new();
        placeholders.insert("attribute", attribute.to_string());
        Self { key, placeholders }
    }

    /// Adds a placeholder.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.placeholders.insert(name, value.into());
        self
    }
}

/// The verdict of a single validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Pass,
    Fail(Failure),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure),
        }
    }

    /// `Pass` when `condition` holds, otherwise the supplied failure.
    pub fn pass_when(condition: bool, failure: impl FnOnce() -> Failure) -> Self {
        if condition {
            Outcome::Pass
        } else {
            Outcome::Fail(failure())
        }
    }
}

/// The uniform validator contract.
///
/// Rules are immutable after construction and validate synchronously; the
/// same `(attribute, value)` always yields the same outcome.
pub trait Rule {
    /// Validates a candidate value for the named attribute.
    fn validate(&self, attribute: &str, value: &str) -> Outcome;

    /// Callback form of the contract: invokes `on_fail` with the message key
    /// and placeholder map iff validation fails. This is the shape external
    /// validation frameworks plug into.
    fn validate_with(
        &self,
        attribute: &str,
        value: &str,
        on_fail: &mut dyn FnMut(&str, &Placeholders),
    ) {
        if let Outcome::Fail(failure) = self.validate(attribute, value) {
            on_fail(failure.key, &failure.placeholders);
        }
    }
}

/// The closed set of registrable rule names.
///
/// This is the single place where rule names exist as strings; a framework
/// adapter resolves an incoming rule name here and then works with typed
/// rules only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    PersianAlpha,
    PersianAlphaNum,
    PersianAlphaEngNum,
    PersianNumber,
    PersianNotAccept,
    PersianDate,
    PersianDateBetween,
    PersianDateBetweenOrEqual,
    PersianDateBetweenYear,
    PersianDateBetweenOrEqualYear,
    PersianDay,
    PersianMonth,
    IranianMobile,
    IranianPhone,
    IranianPhoneAreaCode,
    IranianPostalCode,
    IranianBankCardNumber,
    IranianIban,
    IranianNationalId,
    IranianCompanyId,
}

impl RuleKind {
    /// All registrable kinds, in registration order.
    pub const ALL: [RuleKind; 20] = [
        RuleKind::PersianAlpha,
        RuleKind::PersianAlphaNum,
        RuleKind::PersianAlphaEngNum,
        RuleKind::PersianNumber,
        RuleKind::PersianNotAccept,
        RuleKind::PersianDate,
        RuleKind::PersianDateBetween,
        RuleKind::PersianDateBetweenOrEqual,
        RuleKind::PersianDateBetweenYear,
        RuleKind::PersianDateBetweenOrEqualYear,
        RuleKind::PersianDay,
        RuleKind::PersianMonth,
        RuleKind::IranianMobile,
        RuleKind::IranianPhone,
        RuleKind::IranianPhoneAreaCode,
        RuleKind::IranianPostalCode,
        RuleKind::IranianBankCardNumber,
        RuleKind::IranianIban,
        RuleKind::IranianNationalId,
        RuleKind::IranianCompanyId,
    ];

    /// The rule's registration name (also its base message key).
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::PersianAlpha => keys::PERSIAN_ALPHA,
            RuleKind::PersianAlphaNum => keys::PERSIAN_ALPHA_NUM,
            RuleKind::PersianAlphaEngNum => keys::PERSIAN_ALPHA_ENG_NUM,
            RuleKind::PersianNumber => keys::PERSIAN_NUM,
            RuleKind::PersianNotAccept => keys::PERSIAN_NOT_ACCEPT,
            RuleKind::PersianDate => keys::PERSIAN_DATE,
            RuleKind::PersianDateBetween => keys::PERSIAN_DATE_BETWEEN,
            RuleKind::PersianDateBetweenOrEqual => keys::PERSIAN_DATE_BETWEEN_OR_EQUAL,
            RuleKind::PersianDateBetweenYear => keys::PERSIAN_DATE_BETWEEN_YEAR,
            RuleKind::PersianDateBetweenOrEqualYear => keys::PERSIAN_DATE_BETWEEN_OR_EQUAL_YEAR,
            RuleKind::PersianDay => keys::PERSIAN_DAY,
            RuleKind::PersianMonth => keys::PERSIAN_MONTH,
            RuleKind::IranianMobile => keys::IR_MOBILE,
            RuleKind::IranianPhone => keys::IR_PHONE,
            RuleKind::IranianPhoneAreaCode => keys::IR_PHONE_AREA_CODE,
            RuleKind::IranianPostalCode => keys::IR_POSTAL_CODE,
            RuleKind::IranianBankCardNumber => keys::IR_BANK_CARD_NUMBER,
            RuleKind::IranianIban => keys::IR_IBAN,
            RuleKind::IranianNationalId => keys::IR_NATIONAL_ID,
            RuleKind::IranianCompanyId => keys::IR_COMPANY_ID,
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}
