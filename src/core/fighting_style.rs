//! Fighting style comparison
//!
//! Qualifiers in parentheses are dropped before comparing, so
//! "Brawler (Kiryu Style)" and "Brawler" are the same style.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::categorical::{overlaps, same_elements};
use crate::core::normalize::normalize;
use crate::types::ListVerdict;
use crate::LEGEND_TOKEN;

lazy_static! {
    static ref RE_QUALIFIER: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();
}

/// A style that survived normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Text as stored, qualifiers included
    pub raw: String,
    /// Text with qualifiers stripped
    pub base: String,
}

impl Style {
    /// Normalize one stored style; `None` when nothing concrete is left
    pub fn parse(value: &str) -> Option<Self> {
        let raw = normalize(Some(value))?;
        let base = RE_QUALIFIER.replace_all(raw, "").trim().to_string();
        if base.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            base,
        })
    }

    /// Part of the "Legend" style family (qualifier included)
    pub fn is_legend(&self) -> bool {
        self.raw.contains(LEGEND_TOKEN)
    }
}

/// Normalize every style, dropping the ones that carry no information
pub fn normalize_styles(styles: &[String]) -> Vec<Style> {
    styles.iter().filter_map(|s| Style::parse(s)).collect()
}

/// Compare candidate styles `a` against target styles `b`
pub fn compare_fighting_styles(a: &[String], b: &[String]) -> ListVerdict {
    let a = normalize_styles(a);
    let b = normalize_styles(b);

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return ListVerdict::Green,
        (true, false) | (false, true) => return ListVerdict::Red,
        _ => {}
    }

    let a_base: Vec<String> = a.iter().map(|s| s.base.clone()).collect();
    let b_base: Vec<String> = b.iter().map(|s| s.base.clone()).collect();

    if same_elements(&a_base, &b_base) {
        return ListVerdict::Green;
    }

    if a.iter().any(Style::is_legend) && b.iter().any(Style::is_legend) {
        return ListVerdict::Yellow;
    }

    if overlaps(&a_base, &b_base) {
        ListVerdict::Yellow
    } else {
        ListVerdict::Red
    }
}
