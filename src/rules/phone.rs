//! Iranian landline rules: phone numbers and provincial area codes.
//!
//! A landline number is eight local digits. It may be validated together
//! with a two-digit area code (`0` + `[1-8]{2}`, optionally separated from
//! the local part) or with a country code prefix (`0098`, `+98`, `98`).
//! Area code and country code are mutually exclusive shapes; when a country
//! code format is configured it wins and the separator is ignored, as a
//! grouped international number is not a supported format.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use regex::Regex;

use crate::{
    error::Error,
    messages::keys,
    numerals,
    outcome::{Failure, Outcome, Rule},
    separator::Separator,
    settings::GlobalSettings,
};

/// Which country-code prefix an [`IranianPhone`] rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryCodeFormat {
    /// `00982112345678`
    Zero,
    /// `+982112345678`
    Plus,
    /// `982112345678`
    Normal,
    /// Prefix optional, any of the above.
    All,
}

impl CountryCodeFormat {
    const ALL_FORMATS: [CountryCodeFormat; 4] = [
        CountryCodeFormat::Zero,
        CountryCodeFormat::Plus,
        CountryCodeFormat::Normal,
        CountryCodeFormat::All,
    ];

    fn key(&self) -> &'static str {
        match self {
            CountryCodeFormat::Zero => "zero",
            CountryCodeFormat::Plus => "plus",
            CountryCodeFormat::Normal => "normal",
            CountryCodeFormat::All => "all",
        }
    }

    fn prefix_pattern(&self) -> &'static str {
        match self {
            CountryCodeFormat::Zero => "0098",
            CountryCodeFormat::Plus => r"\+98",
            CountryCodeFormat::Normal => "98",
            CountryCodeFormat::All => r"(0098|\+98|98)?",
        }
    }

    fn example(&self) -> &'static str {
        match self {
            CountryCodeFormat::Zero => "00982112345678",
            CountryCodeFormat::Plus => "+982112345678",
            CountryCodeFormat::Normal => "982112345678",
            CountryCodeFormat::All => "00982112345678, +982112345678, 982112345678",
        }
    }
}

impl FromStr for CountryCodeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCodeFormat::ALL_FORMATS
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl Display for CountryCodeFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Validates an Iranian landline number in the configured shape.
#[derive(Debug, Clone)]
pub struct IranianPhone {
    pattern: Regex,
    key: &'static str,
    example: String,
    convert: bool,
}

impl IranianPhone {
    /// Eight local digits, nothing else.
    pub fn new() -> Result<Self, Error> {
        Self::with_options(false, None, None, false, &GlobalSettings::default())
    }

    /// Area code plus local number, optionally separated (`021-12345678`).
    /// Unrecognized separators fall back to `-`.
    pub fn with_area_code(separator: Option<&str>) -> Result<Self, Error> {
        Self::with_options(true, separator, None, false, &GlobalSettings::default())
    }

    /// Country code plus area code plus local number; `format` is one of
    /// `zero`, `plus`, `normal`, `all`.
    pub fn with_country_code(format: &str) -> Result<Self, Error> {
        Self::with_options(false, None, Some(format), false, &GlobalSettings::default())
    }

    pub fn with_options(
        with_area_code: bool,
        area_code_separator: Option<&str>,
        country_code_format: Option<&str>,
        convert_persian_numbers: bool,
        settings: &GlobalSettings,
    ) -> Result<Self, Error> {
        let (pattern, key, example) = match country_code_format {
            Some(format) => {
                let format: CountryCodeFormat = format.parse()?;
                (
                    format!("^{}[1-8]{{2}}[0-9]{{8}}$", format.prefix_pattern()),
                    keys::IR_PHONE_WITH_COUNTRY_CODE,
                    format.example().to_string(),
                )
            }
            None if with_area_code => {
                let separator = area_code_separator
                    .map(|s| Separator::resolve(s, Separator::Dash, None))
                    .transpose()?;
                let sep_pattern = separator.map(|s| s.pattern()).unwrap_or_default();
                let example = match separator {
                    Some(sep) => format!("021{}12345678", sep.as_char()),
                    None => "02112345678".to_string(),
                };
                (
                    format!("^0[1-8]{{2}}{sep_pattern}[0-9]{{8}}$"),
                    keys::IR_PHONE_WITH_AREA_CODE,
                    example,
                )
            }
            None => (
                "^[0-9]{8}$".to_string(),
                keys::IR_PHONE,
                "12345678".to_string(),
            ),
        };

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            key,
            example,
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        })
    }
}

impl Rule for IranianPhone {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);
        Outcome::pass_when(self.pattern.is_match(&value), || {
            Failure::new(self.key, attribute).with("example", self.example.clone())
        })
    }
}

/// The provincial area codes in service, by province.
pub const AREA_CODES: [&str; 31] = [
    "021", // Tehran
    "026", // Alborz
    "025", // Qom
    "011", // Mazandaran
    "013", // Gilan
    "017", // Golestan
    "041", // East Azerbaijan
    "044", // West Azerbaijan
    "045", // Ardabil
    "024", // Zanjan
    "087", // Kurdistan
    "081", // Hamadan
    "083", // Kermanshah
    "084", // Ilam
    "066", // Lorestan
    "061", // Khuzestan
    "038", // Chaharmahal and Bakhtiari
    "074", // Kohgiluyeh and Boyer-Ahmad
    "031", // Isfahan
    "071", // Fars
    "077", // Bushehr
    "076", // Hormozgan
    "034", // Kerman
    "035", // Yazd
    "054", // Sistan and Baluchestan
    "056", // South Khorasan
    "051", // Razavi Khorasan
    "058", // North Khorasan
    "023", // Semnan
    "086", // Markazi
    "028", // Qazvin
];

/// Validates exact membership in the provincial area-code list.
#[derive(Debug, Clone, Copy, Default)]
pub struct IranianPhoneAreaCode {
    convert: bool,
}

impl IranianPhoneAreaCode {
    pub fn new() -> Self {
        Self { convert: false }
    }

    pub fn with_options(convert_persian_numbers: bool, settings: &GlobalSettings) -> Self {
        Self {
            convert: convert_persian_numbers || settings.convert_persian_numbers,
        }
    }
}

impl Rule for IranianPhoneAreaCode {
    fn validate(&self, attribute: &str, value: &str) -> Outcome {
        let value = numerals::normalize(value, self.convert);
        Outcome::pass_when(AREA_CODES.contains(&value.as_str()), || {
            Failure::new(keys::IR_PHONE_AREA_CODE, attribute).with("example", "021")
        })
    }
}
