//! Height comparison by leading numeric magnitude

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::normalize::normalize;
use crate::types::HeightVerdict;

lazy_static! {
    // First run of digits anywhere in the string: "178 cm (5'10\")" -> 178
    static ref RE_MAGNITUDE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Extract the first run of decimal digits, leading zeros stripped
///
/// Kept as text so any number of digits compares without overflow.
pub fn parse_height(height: &str) -> Option<&str> {
    RE_MAGNITUDE.find(height).map(|m| {
        let digits = m.as_str().trim_start_matches('0');
        if digits.is_empty() {
            "0"
        } else {
            digits
        }
    })
}

/// Order two digit strings without leading zeros by numeric value
fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare candidate height `a` against target height `b`
///
/// A value without digits (or missing on one side only) is `Red`.
pub fn compare_height(a: Option<&str>, b: Option<&str>) -> HeightVerdict {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_none() && b.is_none() {
        return HeightVerdict::Green;
    }

    let (Some(a), Some(b)) = (a.and_then(parse_height), b.and_then(parse_height)) else {
        return HeightVerdict::Red;
    };

    match cmp_magnitude(a, b) {
        Ordering::Equal => HeightVerdict::Green,
        Ordering::Greater => HeightVerdict::Higher,
        Ordering::Less => HeightVerdict::Lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("182"), Some("182"));
        assert_eq!(parse_height("178 (cm)"), Some("178"));
        assert_eq!(parse_height("approx. 180 cm"), Some("180"));
        assert_eq!(parse_height("183.5 cm"), Some("183"));
        assert_eq!(parse_height("0180"), Some("180"));
        assert_eq!(parse_height("000"), Some("0"));
        assert_eq!(parse_height("tall"), None);
    }

    #[test]
    fn test_directional() {
        assert_eq!(compare_height(Some("182"), Some("178 (cm)")), HeightVerdict::Higher);
        assert_eq!(compare_height(Some("178 (cm)"), Some("182")), HeightVerdict::Lower);
        assert_eq!(compare_height(Some("180 cm"), Some("180")), HeightVerdict::Green);
    }

    #[test]
    fn test_missing_information() {
        assert_eq!(compare_height(Some("Unknown"), Some("Unknown")), HeightVerdict::Green);
        assert_eq!(compare_height(None, Some("")), HeightVerdict::Green);
        assert_eq!(compare_height(Some("Unknown"), Some("180")), HeightVerdict::Red);
        assert_eq!(compare_height(Some("180"), None), HeightVerdict::Red);
    }

    #[test]
    fn test_unparseable_is_red() {
        assert_eq!(compare_height(Some("tall"), Some("180")), HeightVerdict::Red);
        assert_eq!(compare_height(Some("tall"), Some("short")), HeightVerdict::Red);
    }

    #[test]
    fn test_long_digit_runs_still_compare() {
        assert_eq!(
            compare_height(Some("99999999999999999999999"), Some("180")),
            HeightVerdict::Higher
        );
        assert_eq!(
            compare_height(Some("180"), Some("99999999999999999999999")),
            HeightVerdict::Lower
        );
        assert_eq!(
            compare_height(Some("100000000000000000000000"), Some("99999999999999999999999")),
            HeightVerdict::Higher
        );
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(compare_height(Some("0180 cm"), Some("180")), HeightVerdict::Green);
        assert_eq!(compare_height(Some("099"), Some("100")), HeightVerdict::Lower);
    }
}
