//! Check-digit and checksum routines for Iranian identifiers.
//!
//! Four independent algorithms: the Luhn variant used by Iranian bank cards,
//! the ISO 7064 MOD-97 check for IBAN (Sheba) numbers, the weighted mod-11
//! check for national IDs (Code Melli), and the control-number scheme for
//! legal-entity IDs (Shenase Melli). All operate on ASCII-digit strings; the
//! callers are responsible for numeral normalization and structural checks.

/// Numeric value of the country code `IR` (I=18, R=27) used in the MOD-97
/// computation whether or not the prefix was supplied in the input.
const IRAN_IBAN_CODE: &str = "1827";

/// Control numbers for the company-ID check digit, repeating over positions.
const COMPANY_CONTROL_NUMBERS: [u32; 5] = [29, 27, 23, 19, 17];

/// Returns true when every character of the string equals the first one.
/// Identifiers consisting of one repeated digit are structurally plausible
/// but reserved as invalid.
pub fn all_same_digits(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Luhn check over exactly 16 digits, as used by Iranian bank cards.
///
/// Positions are 1-indexed from the left; odd positions are doubled (minus 9
/// when the double exceeds 9), even positions are kept. The card is valid iff
/// the transformed sum is divisible by 10. Anything that is not 16 ASCII
/// digits fails.
pub fn luhn16(value: &str) -> bool {
    if value.len() != 16 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = value
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// MOD-97 check for an Iranian IBAN, with or without the `IR` prefix.
///
/// Non-alphanumeric characters are stripped and the input uppercased first,
/// so grouped forms (`IR06-2960-…`) check directly. The first characters
/// after the optional prefix are the check digits; the account body, the
/// fixed Iran country value `1827`, and the check digits are concatenated
/// (letters mapped A–Z → 10–35) and reduced digit-by-digit modulo 97. Valid
/// iff the remainder is 1.
pub fn iban_mod97(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_uppercase();

    let (check_digits, body) = match cleaned.strip_prefix("IR") {
        Some(rest) if rest.len() == 24 => (&rest[..2], &rest[2..]),
        Some(_) => return false,
        None if cleaned.len() == 24 => (&cleaned[..2], &cleaned[2..]),
        None => return false,
    };

    if !check_digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut remainder: u32 = 0;
    let rearranged = body
        .chars()
        .chain(IRAN_IBAN_CODE.chars())
        .chain(check_digits.chars());

    for c in rearranged {
        if let Some(d) = c.to_digit(10) {
            remainder = (remainder * 10 + d) % 97;
        } else if c.is_ascii_uppercase() {
            // A=10 .. Z=35, two digits each
            let n = c as u32 - 'A' as u32 + 10;
            remainder = (remainder * 10 + n / 10) % 97;
            remainder = (remainder * 10 + n % 10) % 97;
        } else {
            return false;
        }
    }

    remainder == 1
}

/// Weighted mod-11 check for a 10-digit national ID (Code Melli).
///
/// The first nine digits are weighted 10 down to 2 and summed; the expected
/// check digit is the remainder mod 11 when below 2, otherwise 11 minus the
/// remainder. All-identical inputs are rejected outright.
pub fn national_id(value: &str) -> bool {
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if all_same_digits(value) {
        return false;
    }

    let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
    let sum: u32 = digits
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();

    let remainder = sum % 11;
    let expected = if remainder < 2 { remainder } else { 11 - remainder };

    digits[9] == expected
}

/// Control-number check for an 11-digit company ID (Shenase Melli).
///
/// The tens digit (position 9) plus 2 is added to each of the first ten
/// digits before multiplying by the repeating control numbers
/// `29, 27, 23, 19, 17`; the expected check digit is the sum mod 11 (0 when
/// the remainder is 10). All-identical inputs are rejected outright.
pub fn company_id(value: &str) -> bool {
    if value.len() != 11 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if all_same_digits(value) {
        return false;
    }

    let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
    let multiplier = digits[9] + 2;
    let sum: u32 = digits
        .iter()
        .take(10)
        .enumerate()
        .map(|(i, d)| (d + multiplier) * COMPANY_CONTROL_NUMBERS[i % 5])
        .sum();

    let remainder = sum % 11;
    let expected = if remainder == 10 { 0 } else { remainder };

    digits[10] == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_same_digits() {
        assert!(all_same_digits("0000000000"));
        assert!(all_same_digits("99999"));
        assert!(!all_same_digits("0000000001"));
        assert!(!all_same_digits(""));
    }

    #[test]
    fn test_luhn16_known_card() {
        assert!(luhn16("6037997599422129"));
        // Adjacent checksum mismatch
        assert!(!luhn16("6037997599439129"));
    }

    #[test]
    fn test_luhn16_rejects_bad_shape() {
        assert!(!luhn16("603799759942212"));
        assert!(!luhn16("60379975994221299"));
        assert!(!luhn16("603799759942212a"));
        assert!(!luhn16(""));
    }

    #[test]
    fn test_iban_mod97_with_and_without_prefix() {
        assert!(iban_mod97("IR062960000000100324200001"));
        assert!(iban_mod97("062960000000100324200001"));
        assert!(!iban_mod97("IR062960000000100324200002"));
        assert!(!iban_mod97("062960000000100324200002"));
    }

    #[test]
    fn test_iban_mod97_grouped_input() {
        assert!(iban_mod97("IR06-2960-0000-0010-0324-2000-01"));
        assert!(iban_mod97("IR06 2960 0000 0010 0324 2000 01"));
    }

    #[test]
    fn test_iban_mod97_rejects_bad_shape() {
        assert!(!iban_mod97("IR06296000000010032420000"));
        assert!(!iban_mod97("IR0629600000001003242000012"));
        assert!(!iban_mod97(""));
        assert!(!iban_mod97("IRXX2960000000100324200001"));
    }

    #[test]
    fn test_national_id_known_values() {
        assert!(national_id("0013542419"));
        assert!(!national_id("1234567890"));
    }

    #[test]
    fn test_national_id_repeated_digits_always_fail() {
        for d in 0..=9u8 {
            let value: String = std::iter::repeat_n(char::from(b'0' + d), 10).collect();
            assert!(!national_id(&value), "{value} must fail");
        }
    }

    #[test]
    fn test_national_id_rejects_bad_shape() {
        assert!(!national_id("001354241"));
        assert!(!national_id("00135424199"));
        assert!(!national_id("00135a2419"));
    }

    #[test]
    fn test_company_id_known_values() {
        assert!(company_id("14007650912"));
        assert!(!company_id("14007650911"));
        assert!(!company_id("11111111111"));
    }

    #[test]
    fn test_company_id_rejects_bad_shape() {
        assert!(!company_id("1400765091"));
        assert!(!company_id("140076509122"));
        assert!(!company_id("1400765091a"));
    }
}
