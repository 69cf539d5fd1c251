//! Value normalization: collapses missing data to "no information"
//!
//! `None` is the "no information" sentinel throughout the comparator.

use crate::types::FieldValue;
use crate::UNKNOWN_LITERAL;

/// Collapse empty strings and "Unknown" (any case, surrounding whitespace) to `None`
pub fn normalize(value: Option<&str>) -> Option<&str> {
    match value {
        None => None,
        Some("") => None,
        Some(v) if v.trim().eq_ignore_ascii_case(UNKNOWN_LITERAL) => None,
        Some(v) => Some(v),
    }
}

/// Turn a string-or-list field into a list
///
/// No information becomes an empty list, a single value becomes a one-element
/// list, a list is taken as-is.
pub fn to_sequence(value: Option<&FieldValue>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(FieldValue::Many(values)) => values.clone(),
        Some(FieldValue::One(v)) => match normalize(Some(v)) {
            Some(v) => vec![v.to_string()],
            None => Vec::new(),
        },
    }
}
