//! Iranian mobile number rule.
//!
//! A mobile number is `9` plus nine digits, optionally carrying a country
//! code prefix (`0098`, `+98`, `98`) or the domestic leading zero. The
//! accepted prefix is selected by [`MobileFormat`]; the default accepts all
//! of them.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    settings::GlobalSettings,
};

/// Operator prefix block after the leading `9`: `901`–`905`, `91x`–`99x`.
const OPERATOR_PATTERN: &str = r"(0[1-5]|[1-9][0-9]|2[0-2]|98)[0-9]{7}";

/// Which prefix shape an [`IranianMobile`] rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MobileFormat {
    /// `00989123456789`
    ZeroCode,
    /// `+989123456789`
    PlusCode,
    /// `989123456789`
    Code,
    /// `09123456789`
    Zero,
    /// `9123456789`
    Normal,
    /// Any of the above.
    #[default]
    All,
}

impl MobileFormat {
    const ALL_FORMATS: [MobileFormat; 6] = [
        MobileFormat::ZeroCode,
        MobileFormat::PlusCode,
        MobileFormat::Code,
        MobileFormat::Zero,
        MobileFormat::Normal,
        MobileFormat::All,
    ];

    fn key(&self) -> &'static str {
        match self {
            MobileFormat::ZeroCode => "zero_code",
            MobileFormat::PlusCode => "plus_code",
            MobileFormat::Code => "code",
            MobileFormat::Zero => "zero",
            MobileFormat::Normal => "normal",
            MobileFormat::All => "all",
        }
    }

    fn prefix_pattern(&self) -> &'static str {
        match self {
            MobileFormat::ZeroCode => "00989",
            MobileFormat::PlusCode => r"\+989",
            MobileFormat::Code => "989",
            MobileFormat::Zero => "09",
            MobileFormat::Normal => "9",
            MobileFormat::All => r"(0|0098|\+98|98)?9",
        }
    }

    fn example(&self) -> &'static str {
        match self {
            MobileFormat::ZeroCode => "00989123456789",
            MobileFormat::PlusCode => "+989123456789",
            MobileFormat::Code => "989123456789",
            MobileFormat::Zero => "09123456789",
            MobileFormat::Normal => "9123456789",
            MobileFormat::All => {
                "00989123456789, +989123456789, 989123456789, 09123456789, 9123456789"
            }
        }
    }

    /// Domestic shapes fail with the plain mobile key; anything involving a
    /// country code uses the country-code key.
    fn message_key(&self) -> &'static str {
        match self {
            MobileFormat::Zero | MobileFormat::Normal => keys::IR_MOBILE,
            _ => keys::IR_MOBILE_WITH_COUNTRY_CODE,
        }
    }
}

impl FromStr for MobileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MobileFormat::ALL_FORMATS
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl Display for MobileFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

lazy_static! {
    static ref MOBILE_PATTERNS: HashMap<MobileFormat, Regex> = {
        let mut m = HashMap::new();
        for format in MobileFormat::ALL_FORMATS {
            let pattern = format!("^{}{OPERATOR_PATTERN}$", format.prefix_pattern());
            m.insert(format, Regex::new(&pattern).unwrap());
        }
        m
    };
}

/// Validates an Iranian mobile number in the configured format.
#[derive(Debug, Clone)]
pub struct IranianMobile {
    format: MobileFormat,
    convert: bool,
}

impl IranianMobile {
    /// Accepts every prefix shape, no numeral conversion.
    pub fn new() -> Self {
        Self {
            format: MobileFormat::All,
            convert: false,
        }
    }

    /// Parses a format key (`zero_code`, `plus_code`, `code`, `zero`,
    /// `normal`, `all`); an unknown key is a configuration error.
    pub fn with_format(format: &str) -> Result<Self, Error> {
        Self::with_options(format, false, &GlobalSettings::default())
    }

    pub fn with_options(
        format: &str,
        convert_persian_numbers: bool,
        settings: &GlobalSettings,
    ) -> Result<Self, Error> {
        Ok(Self {
            format: format.parse()?,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        })
    }
}

impl Default for IranianMobile {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IranianMobile {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);
        Outcome::pass_when(MOBILE_PATTERNS[&self.format].is_match(&value), || {
            Failure::new(self.format.message_key(), attribute)
                .with("example", self.format.example())
        })
    }
}
