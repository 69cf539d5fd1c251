//! Categorical comparisons: unordered lists, single values, game lists

use crate::core::normalize::normalize;
use crate::types::{ListVerdict, MatchVerdict};
use crate::EXCLUDED_GAME;

/// Same elements irrespective of order; duplicates count
pub fn same_elements(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut b: Vec<&str> = b.iter().map(String::as_str).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// At least one element of `a` appears in `b`
pub fn overlaps(a: &[String], b: &[String]) -> bool {
    a.iter().any(|x| b.contains(x))
}

/// Compare two lists of categorical tokens (affiliation, nationality)
///
/// Two empty lists are a match.
pub fn compare_lists(a: &[String], b: &[String]) -> ListVerdict {
    if a.is_empty() && b.is_empty() {
        return ListVerdict::Green;
    }
    overlap_verdict(a, b)
}

/// Compare two single categorical values (blood type)
pub fn compare_values(a: Option<&str>, b: Option<&str>) -> MatchVerdict {
    match (normalize(a), normalize(b)) {
        (None, None) => MatchVerdict::Green,
        (Some(a), Some(b)) if a == b => MatchVerdict::Green,
        _ => MatchVerdict::Red,
    }
}

/// Compare two game lists, ignoring the excluded title
///
/// Unlike [`compare_lists`], two lists that are empty after exclusion are
/// no match: an empty game list carries no positive signal.
pub fn compare_games(a: &[String], b: &[String]) -> ListVerdict {
    let a = without_excluded(a);
    let b = without_excluded(b);
    if a.is_empty() && b.is_empty() {
        return ListVerdict::Red;
    }
    overlap_verdict(&a, &b)
}

fn without_excluded(games: &[String]) -> Vec<String> {
    games
        .iter()
        .filter(|g| g.as_str() != EXCLUDED_GAME)
        .cloned()
        .collect()
}

fn overlap_verdict(a: &[String], b: &[String]) -> ListVerdict {
    if same_elements(a, b) {
        ListVerdict::Green
    } else if overlaps(a, b) {
        ListVerdict::Yellow
    } else {
        ListVerdict::Red
    }
}
