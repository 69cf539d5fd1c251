//! Date of birth comparison
//!
//! Two tiers:
//! 1. Both strings parse as full calendar dates: compare day, month and year.
//! 2. Otherwise fall back to a bare 4-digit year found in each string.
//!
//! The fallback exists because many records only carry a year.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::core::normalize::normalize;
use crate::types::BirthVerdict;

lazy_static! {
    // Years 1000-2999 standing alone; ASCII boundaries so "1968年" still counts
    static ref RE_YEAR: Regex = Regex::new(r"(?-u:\b)[12][0-9]{3}(?-u:\b)").unwrap();
}

/// Accepted calendar layouts, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a full calendar date (day, month and year all present)
///
/// The parsed year must be the standalone 4-digit year written in the
/// string. chrono happily splits "June 1968" into day 19 of year 68.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let year = parse_year(value)?;
    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .find(|date| date.year() == year)
}

/// Extract the first standalone 4-digit year starting with 1 or 2
pub fn parse_year(value: &str) -> Option<i32> {
    RE_YEAR.find(value).and_then(|m| m.as_str().parse().ok())
}

/// Compare candidate birth date `a` against target birth date `b`
pub fn compare_birth(a: Option<&str>, b: Option<&str>) -> BirthVerdict {
    let (a, b) = match (normalize(a), normalize(b)) {
        (None, None) => return BirthVerdict::Green,
        (Some(a), Some(b)) => (a, b),
        _ => return BirthVerdict::Red,
    };

    match (parse_date(a), parse_date(b)) {
        (Some(da), Some(db)) => compare_dates(da, db),
        _ => compare_years(a, b),
    }
}

fn compare_dates(a: NaiveDate, b: NaiveDate) -> BirthVerdict {
    let same_day = a.day() == b.day();
    let same_month = a.month() == b.month();
    let same_year = a.year() == b.year();

    if same_day && same_month && same_year {
        return BirthVerdict::Green;
    }

    if same_year || (same_day && same_month) {
        if a < b {
            BirthVerdict::Older
        } else {
            BirthVerdict::Younger
        }
    } else if a < b {
        BirthVerdict::RedOlder
    } else {
        BirthVerdict::RedYounger
    }
}

fn compare_years(a: &str, b: &str) -> BirthVerdict {
    match (parse_year(a), parse_year(b)) {
        (Some(ya), Some(yb)) if ya == yb => BirthVerdict::Green,
        (Some(ya), Some(yb)) if ya < yb => BirthVerdict::RedOlder,
        (Some(_), Some(_)) => BirthVerdict::RedYounger,
        _ => BirthVerdict::Red,
    }
}
