//! All error types for the persian-validation crate.
//!
//! These cover configuration mistakes only: an unknown format key, a
//! separator outside an explicit allow-list, a malformed boundary date or
//! year. Input values that merely fail validation are reported through
//! [`crate::outcome::Outcome`], never through `Error`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("unknown separator `{0}`")]
    UnknownSeparator(String),

    #[error("separator `{input}` is not allowed here (allowed: {allowed})")]
    SeparatorNotAllowed { input: String, allowed: String },

    #[error("invalid boundary date `{0}`")]
    InvalidBoundaryDate(String),

    #[error("invalid boundary year `{0}`")]
    InvalidBoundaryYear(String),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl Error {
    /// Creates a `SeparatorNotAllowed` error from the offending input and
    /// the allowed set's display forms.
    pub(crate) fn separator_not_allowed(input: &str, allowed: &[&str]) -> Self {
        Error::SeparatorNotAllowed {
            input: input.to_string(),
            allowed: allowed.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_error() {
        let error = Error::UnknownFormat("plus_plus".to_string());
        assert_eq!(error.to_string(), "unknown format `plus_plus`");
    }

    #[test]
    fn test_separator_not_allowed_error() {
        let error = Error::separator_not_allowed("-", &["/", "."]);
        assert_eq!(
            error.to_string(),
            "separator `-` is not allowed here (allowed: /, .)"
        );
    }

    #[test]
    fn test_invalid_boundary_date_error() {
        let error = Error::InvalidBoundaryDate("1403/13/01".to_string());
        assert!(error.to_string().contains("1403/13/01"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownSeparator("?".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownSeparator"));
    }
}
