//! Process-wide configuration.
//!
//! Two toggles, read once at startup and threaded explicitly into rule
//! construction. Nothing in the validation logic reads configuration
//! implicitly; a rule's effective numeral-conversion behavior is its local
//! flag OR'ed with [`GlobalSettings::convert_persian_numbers`] at the time
//! the rule is built.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Global toggles mirrored from the host application's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Whether the framework adapter should auto-register the rules under
    /// their string names. Irrelevant to the core validators; carried here
    /// for the adapter's benefit.
    #[serde(default = "default_true")]
    pub register_rules: bool,

    /// Whether Persian/Arabic-Indic numerals are converted to ASCII in every
    /// digit-consuming rule by default.
    #[serde(default)]
    pub convert_persian_numbers: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            register_rules: true,
            convert_persian_numbers: false,
        }
    }
}

impl GlobalSettings {
    /// Loads settings from a JSON document, e.g. a config file already read
    /// into memory. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
