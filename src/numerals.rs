//! Persian/Arabic-Indic ⇄ ASCII digit transliteration.
//!
//! Iranian identifiers are routinely typed with Persian (`۰`–`۹`) or
//! Arabic-Indic (`٠`–`٩`) digits, often mixed with ASCII in the same string.
//! Every function here is total: non-digit characters pass through unchanged.

/// Converts Persian and Arabic-Indic digits to their ASCII equivalents.
///
/// Mixed scripts in one string are handled, e.g. `"۰9١23456789"` becomes
/// `"09123456789"`. Idempotent on pure-ASCII input.
///
/// # Example
///
/// ```rust
/// use persian_validation::numerals::to_ascii;
/// assert_eq!(to_ascii("۰۹۱۲۳۴۵۶۷۸۹"), "09123456789");
/// assert_eq!(to_ascii("تهران ۲۱"), "تهران 21");
/// ```
pub fn to_ascii(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '۰'..='۹' => char::from(b'0' + (c as u32 - '۰' as u32) as u8),
            '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Converts ASCII digits to Persian digits, leaving everything else intact.
///
/// Only used for rendering human-readable examples (e.g. a Persian date in a
/// failure message); Arabic-Indic digits are not produced.
pub fn to_persian(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32('۰' as u32 + (c as u32 - '0' as u32)).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Applies [`to_ascii`] when `convert` is set, otherwise returns the input
/// unchanged. Rules call this with their effective conversion flag (the
/// local parameter OR'ed with the global setting at construction time).
pub fn normalize(input: &str, convert: bool) -> String {
    if convert {
        to_ascii(input)
    } else {
        input.to_string()
    }
}
