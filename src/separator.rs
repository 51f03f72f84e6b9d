//! Separator handling for rules that accept grouped input.
//!
//! Several identifiers may be written with a grouping character (postal codes
//! as `12345-67890`, bank cards as `6037-9975-9942-2129`, IBANs as
//! `IR06 2960 0000 0010 0324 2000 01`). The accepted separators form a fixed
//! set; anything a rule embeds in a pattern goes through [`Separator::pattern`]
//! so a regex metacharacter can never leak into a pattern unescaped.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of separators accepted by grouping-aware rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    Slash,
    Pipe,
    Dash,
    Underscore,
    Star,
    Dot,
    Comma,
    Space,
}

/// Accepts the literal character, or the word `"space"` for [`Separator::Space`].
impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" => Ok(Separator::Slash),
            "|" => Ok(Separator::Pipe),
            "-" => Ok(Separator::Dash),
            "_" => Ok(Separator::Underscore),
            "*" => Ok(Separator::Star),
            "." => Ok(Separator::Dot),
            "," => Ok(Separator::Comma),
            "space" | " " => Ok(Separator::Space),
            other => Err(Error::UnknownSeparator(other.to_string())),
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

impl Separator {
    /// The regex fragment matching this separator, escaped where the literal
    /// character has metacharacter meaning. `Space` matches any whitespace,
    /// as the original patterns did.
    pub fn pattern(&self) -> &'static str {
        match self {
            Separator::Slash => r"\/",
            Separator::Pipe => r"\|",
            Separator::Dash => "-",
            Separator::Underscore => "_",
            Separator::Star => r"\*",
            Separator::Dot => r"\.",
            Separator::Comma => ",",
            Separator::Space => r"\s",
        }
    }

    /// The literal display form, used in message placeholders and examples.
    /// `Space` renders as the word `"space"`; use [`Separator::as_char`] when
    /// a real character is needed.
    pub fn literal(&self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Pipe => "|",
            Separator::Dash => "-",
            Separator::Underscore => "_",
            Separator::Star => "*",
            Separator::Dot => ".",
            Separator::Comma => ",",
            Separator::Space => "space",
        }
    }

    /// The separator as a plain character (`Space` is `' '`), used when
    /// stripping separators out of a matched value or building examples.
    pub fn as_char(&self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Pipe => '|',
            Separator::Dash => '-',
            Separator::Underscore => '_',
            Separator::Star => '*',
            Separator::Dot => '.',
            Separator::Comma => ',',
            Separator::Space => ' ',
        }
    }

    /// Resolves a separator parameter.
    ///
    /// Without an `allows` restriction, unrecognized input falls back to
    /// `default`, a deliberate safe-fallback policy rather than an error. With an
    /// explicit `allows` list, input that does not resolve to a member of the
    /// list is a configuration error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use persian_validation::separator::Separator;
    ///
    /// assert_eq!(Separator::resolve("?", Separator::Dash, None).unwrap(), Separator::Dash);
    /// assert!(Separator::resolve("-", Separator::Dash, Some(&[Separator::Slash])).is_err());
    /// ```
    pub fn resolve(
        input: &str,
        default: Separator,
        allows: Option<&[Separator]>,
    ) -> Result<Separator, Error> {
        match (input.parse::<Separator>(), allows) {
            (Ok(sep), None) => Ok(sep),
            (Ok(sep), Some(list)) => {
                if list.contains(&sep) {
                    Ok(sep)
                } else {
                    Err(Error::separator_not_allowed(
                        input,
                        &list.iter().map(|s| s.literal()).collect::<Vec<_>>(),
                    ))
                }
            }
            (Err(_), None) => Ok(default),
            (Err(_), Some(list)) => Err(Error::separator_not_allowed(
                input,
                &list.iter().map(|s| s.literal()).collect::<Vec<_>>(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_literals() {
        assert_eq!("/".parse::<Separator>().unwrap(), Separator::Slash);
        assert_eq!("|".parse::<Separator>().unwrap(), Separator::Pipe);
        assert_eq!("-".parse::<Separator>().unwrap(), Separator::Dash);
        assert_eq!("_".parse::<Separator>().unwrap(), Separator::Underscore);
        assert_eq!("*".parse::<Separator>().unwrap(), Separator::Star);
        assert_eq!(".".parse::<Separator>().unwrap(), Separator::Dot);
        assert_eq!(",".parse::<Separator>().unwrap(), Separator::Comma);
        assert_eq!("space".parse::<Separator>().unwrap(), Separator::Space);
        assert_eq!(" ".parse::<Separator>().unwrap(), Separator::Space);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("?".parse::<Separator>().is_err());
        assert!("--".parse::<Separator>().is_err());
        assert!("".parse::<Separator>().is_err());
    }

    #[test]
    fn test_pattern_escaping() {
        assert_eq!(Separator::Slash.pattern(), r"\/");
        assert_eq!(Separator::Dot.pattern(), r"\.");
        assert_eq!(Separator::Star.pattern(), r"\*");
        assert_eq!(Separator::Space.pattern(), r"\s");
        assert_eq!(Separator::Dash.pattern(), "-");
    }

    #[test]
    fn test_pattern_fragments_compile() {
        for sep in [
            Separator::Slash,
            Separator::Pipe,
            Separator::Dash,
            Separator::Underscore,
            Separator::Star,
            Separator::Dot,
            Separator::Comma,
            Separator::Space,
        ] {
            let pattern = format!(r"^\d{{2}}{}\d{{2}}$", sep.pattern());
            let re = regex::Regex::new(&pattern).unwrap();
            let sample = format!("12{}34", sep.as_char());
            assert!(re.is_match(&sample), "pattern for {:?} failed", sep);
        }
    }

    #[test]
    fn test_resolve_fallback_without_allows() {
        assert_eq!(
            Separator::resolve("?", Separator::Dash, None).unwrap(),
            Separator::Dash
        );
        assert_eq!(
            Separator::resolve(".", Separator::Dash, None).unwrap(),
            Separator::Dot
        );
    }

    #[test]
    fn test_resolve_allow_list_violation() {
        let err = Separator::resolve("-", Separator::Dash, Some(&[Separator::Slash]));
        assert!(matches!(err, Err(Error::SeparatorNotAllowed { .. })));
    }

    #[test]
    fn test_resolve_allow_list_member() {
        assert_eq!(
            Separator::resolve("/", Separator::Dash, Some(&[Separator::Slash])).unwrap(),
            Separator::Slash
        );
    }

    #[test]
    fn test_resolve_unparsable_with_allows_is_error() {
        assert!(Separator::resolve("?", Separator::Dash, Some(&[Separator::Slash])).is_err());
    }

    #[test]
    fn test_display_space_is_word() {
        assert_eq!(Separator::Space.to_string(), "space");
        assert_eq!(Separator::Dash.to_string(), "-");
    }
}
