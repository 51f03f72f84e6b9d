//! Iranian company ID (Shenase Melli) rule.
//!
//! Eleven digits whose check digit is derived from the repeating control
//! numbers `29, 27, 23, 19, 17` and the tens digit of the identifier.

use crate::{
    checksum,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    settings::GlobalSettings,
};

/// Validates an Iranian legal-entity identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct IranianCompanyId {
    convert: bool,
}

impl IranianCompanyId {
    pub fn new() -> Self {
        Self { convert: false }
    }

    pub fn with_options(convert_persian_numbers: bool, settings: &GlobalSettings) -> Self {
        Self {
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        }
    }
}

impl Rule for IranianCompanyId {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);
        Outcome::pass_when(checksum::company_id(&value), || {
            Failure::new(keys::IR_COMPANY_ID, attribute)
        })
    }
}
