//! Phone number normalization and equivalence.
//!
//! Decides whether two phone-number strings written in different formats
//! (with/without country code, separators, leading zeros vs. `+`) refer to
//! the same logical number. Normalization failures are never surfaced to
//! callers; comparison degrades to a conservative digit-only form instead.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Country calling codes by two-letter ISO region, lowercase.
///
/// Covers the regions the app ships localization for plus their common
/// neighbours. Unknown regions fall back to digit-only comparison.
static REGION_CALLING_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("at", "43"),
        ("au", "61"),
        ("be", "32"),
        ("br", "55"),
        ("ca", "1"),
        ("ch", "41"),
        ("cn", "86"),
        ("cz", "420"),
        ("de", "49"),
        ("dk", "45"),
        ("es", "34"),
        ("fi", "358"),
        ("fr", "33"),
        ("gb", "44"),
        ("gr", "30"),
        ("hu", "36"),
        ("ie", "353"),
        ("in", "91"),
        ("it", "39"),
        ("jp", "81"),
        ("li", "423"),
        ("lu", "352"),
        ("mx", "52"),
        ("nl", "31"),
        ("no", "47"),
        ("nz", "64"),
        ("pl", "48"),
        ("pt", "351"),
        ("ro", "40"),
        ("ru", "7"),
        ("se", "46"),
        ("sg", "65"),
        ("sk", "421"),
        ("tr", "90"),
        ("ua", "380"),
        ("us", "1"),
        ("za", "27"),
    ])
});

/// All known calling codes, for stripping international prefixes.
static CALLING_CODES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| REGION_CALLING_CODES.values().copied().collect());

/// A phone number that could not be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationFailure {
    /// The stripped string contains no digits at all
    #[error("phone number contains no digits: {0:?}")]
    NoDigits(String),
}

/// The outcome of normalizing a single phone-number string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedNumber {
    /// Confident international form: `+<calling code><national number>`
    International(String),

    /// Digit-only best effort; the number was nationally formatted and no
    /// usable country hint was available
    Unresolved(String),
}

impl NormalizedNumber {
    /// The normalized string, whichever form was reached.
    pub fn as_str(&self) -> &str {
        match self {
            Self::International(s) | Self::Unresolved(s) => s,
        }
    }

    /// Whether normalization reached a confident international form.
    pub fn is_international(&self) -> bool {
        matches!(self, Self::International(_))
    }
}

/// Look up the calling code for a two-letter ISO region, case-insensitive.
pub fn calling_code(iso: &str) -> Option<&'static str> {
    REGION_CALLING_CODES.get(iso.to_ascii_lowercase().as_str()).copied()
}

/// Reduce a raw phone string to digits plus an optional leading `+`.
fn strip(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::new();
    for (i, ch) in trimmed.chars().enumerate() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch == '+' && i == 0 {
            out.push('+');
        }
    }
    out
}

/// Normalize a raw phone-number string toward international form.
///
/// - `+...` and `00...` inputs resolve directly.
/// - Nationally formatted input resolves through `default_country_iso`:
///   a single trunk `0` is dropped and the region's calling code prepended.
/// - Without a usable hint the digit-only form is returned as `Unresolved`.
///
/// # Errors
///
/// Returns `NormalizationFailure::NoDigits` when the stripped string
/// contains no digits at all.
pub fn normalize(
    raw: &str,
    default_country_iso: Option<&str>,
) -> Result<NormalizedNumber, NormalizationFailure> {
    let stripped = strip(raw);

    if !stripped.chars().any(|c| c.is_ascii_digit()) {
        return Err(NormalizationFailure::NoDigits(raw.to_string()));
    }

    if let Some(rest) = stripped.strip_prefix('+') {
        return Ok(NormalizedNumber::International(format!("+{}", rest)));
    }

    if let Some(rest) = stripped.strip_prefix("00") {
        if !rest.is_empty() {
            return Ok(NormalizedNumber::International(format!("+{}", rest)));
        }
        return Ok(NormalizedNumber::Unresolved(stripped));
    }

    if let Some(code) = default_country_iso.and_then(calling_code) {
        let national = stripped.strip_prefix('0').unwrap_or(&stripped);
        if !national.is_empty() {
            return Ok(NormalizedNumber::International(format!("+{}{}", code, national)));
        }
    }

    Ok(NormalizedNumber::Unresolved(stripped))
}

/// Drop a known calling code from the front of a digit string.
///
/// Tries the longest code first; leaves the string untouched when no known
/// code matches or stripping would consume every digit.
fn strip_calling_code(digits: &str) -> &str {
    for len in [3, 2, 1] {
        if digits.len() > len && CALLING_CODES.contains(&digits[..len]) {
            return &digits[len..];
        }
    }
    digits
}

/// The digits that identify a number once international and trunk prefixes
/// are removed. Used for the conservative fallback comparison.
fn significant_digits(raw: &str) -> String {
    let stripped = strip(raw);

    if let Some(rest) = stripped.strip_prefix('+') {
        return strip_calling_code(rest).to_string();
    }

    if let Some(rest) = stripped.strip_prefix("00") {
        if !rest.is_empty() {
            return strip_calling_code(rest).to_string();
        }
        return stripped;
    }

    if stripped.len() > 1 && stripped.starts_with('0') {
        return stripped[1..].to_string();
    }

    stripped
}

/// Whether two phone-number strings refer to the same logical number.
///
/// True iff both sides normalize to the same international representation,
/// or — when at least one side stays unresolved — their significant-digit
/// forms are identical and non-empty. Never panics; input without digits
/// compares equal only to a byte-identical raw string.
pub fn are_equivalent(a: &str, b: &str, default_country_iso: Option<&str>) -> bool {
    match (
        normalize(a, default_country_iso),
        normalize(b, default_country_iso),
    ) {
        (
            Ok(NormalizedNumber::International(left)),
            Ok(NormalizedNumber::International(right)),
        ) => left == right,
        (Ok(_), Ok(_)) => {
            let left = significant_digits(a);
            let right = significant_digits(b);
            !left.is_empty() && left == right
        }
        (Err(_), Err(_)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keeps_leading_plus_only() {
        assert_eq!(strip("+41 44 123 45 67"), "+41441234567");
        assert_eq!(strip("  044-123-45-67 "), "0441234567");
        assert_eq!(strip("044+123"), "044123");
        assert_eq!(strip("tel:"), "");
    }

    #[test]
    fn test_normalize_international_input() {
        let n = normalize("+41 44 123 45 67", None).unwrap();
        assert_eq!(n, NormalizedNumber::International("+41441234567".to_string()));

        let n = normalize("0041 44 123 45 67", None).unwrap();
        assert_eq!(n, NormalizedNumber::International("+41441234567".to_string()));
    }

    #[test]
    fn test_normalize_national_with_hint() {
        let n = normalize("044 123 45 67", Some("ch")).unwrap();
        assert_eq!(n, NormalizedNumber::International("+41441234567".to_string()));

        // Hint lookup is case-insensitive
        let n = normalize("044 123 45 67", Some("CH")).unwrap();
        assert_eq!(n, NormalizedNumber::International("+41441234567".to_string()));

        // No trunk zero: the calling code is still prepended
        let n = normalize("4155551212", Some("us")).unwrap();
        assert_eq!(n, NormalizedNumber::International("+14155551212".to_string()));
    }

    #[test]
    fn test_normalize_without_hint_stays_unresolved() {
        let n = normalize("044 123 45 67", None).unwrap();
        assert_eq!(n, NormalizedNumber::Unresolved("0441234567".to_string()));
        assert!(!n.is_international());
    }

    #[test]
    fn test_normalize_unknown_region_stays_unresolved() {
        let n = normalize("044 123 45 67", Some("zz")).unwrap();
        assert_eq!(n, NormalizedNumber::Unresolved("0441234567".to_string()));
    }

    #[test]
    fn test_normalize_rejects_digitless_input() {
        assert!(matches!(
            normalize("anonymous", None),
            Err(NormalizationFailure::NoDigits(_))
        ));
        assert!(matches!(
            normalize("", Some("ch")),
            Err(NormalizationFailure::NoDigits(_))
        ));
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(significant_digits("+41441234567"), "441234567");
        assert_eq!(significant_digits("0041441234567"), "441234567");
        assert_eq!(significant_digits("0441234567"), "441234567");
        assert_eq!(significant_digits("441234567"), "441234567");
    }

    #[test]
    fn test_equivalent_swiss_formatting_variants() {
        let variants = [
            "044 123 45 67",
            "+41 44 123 45 67",
            "0441234567",
            "044-123-45-67",
            "+41441234567",
        ];
        for a in &variants {
            for b in &variants {
                assert!(
                    are_equivalent(a, b, Some("ch")),
                    "{:?} should be equivalent to {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_not_equivalent_on_digit_mismatch() {
        let incoming = "044 123 45 67";
        for other in [
            "0441234568",
            "044 123 44 67",
            "+41 44 125 45 67",
            "+42441234537",
            "+41431234567",
        ] {
            assert!(
                !are_equivalent(incoming, other, Some("ch")),
                "{:?} must not match {:?}",
                incoming,
                other
            );
        }
    }

    #[test]
    fn test_equivalence_is_symmetric() {
        let samples = [
            ("044 123 45 67", "+41441234567"),
            ("0441234567", "0441234568"),
            ("4155551212", "+1 415 555 1212"),
            ("no digits", "044"),
        ];
        for iso in [Some("ch"), Some("us"), None] {
            for (a, b) in &samples {
                assert_eq!(are_equivalent(a, b, iso), are_equivalent(b, a, iso));
            }
        }
    }

    #[test]
    fn test_equivalence_is_reflexive_modulo_formatting() {
        for x in ["044 123 45 67", "+41441234567", "12", "0"] {
            assert!(are_equivalent(x, x, Some("ch")));
            assert!(are_equivalent(x, x, None));
        }
    }

    #[test]
    fn test_fallback_digit_comparison_without_hint() {
        // One side international, the other bare national digits: the
        // significant-digit fallback still connects them.
        assert!(are_equivalent("+41441234567", "441234567", None));
        assert!(are_equivalent("0441234567", "+41441234567", None));

        // A real digit difference stays a non-match
        assert!(!are_equivalent("+41441234567", "431234567", None));
    }

    #[test]
    fn test_digitless_input_never_matches_digits() {
        assert!(!are_equivalent("anonymous", "0441234567", Some("ch")));
        assert!(!are_equivalent("anonymous", "blocked", None));
        // Byte-identical digitless strings are the only exception
        assert!(are_equivalent("anonymous", "anonymous", None));
    }

    #[test]
    fn test_calling_code_lookup() {
        assert_eq!(calling_code("ch"), Some("41"));
        assert_eq!(calling_code("US"), Some("1"));
        assert_eq!(calling_code("zz"), None);
    }
}
