//! Canonical comparison form of country labels.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_RUNS: Regex = Regex::new(r"[-_]+").expect("valid separator regex");
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").expect("valid whitespace regex");
}

/// Lower-case `raw`, turn hyphen/underscore runs into a space, collapse
/// whitespace and trim. `None` normalizes to the empty string.
///
/// The result is a fixed point: `normalize(Some(&normalize(x))) == normalize(x)`.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let lower = raw.to_lowercase();
    let spaced = SEPARATOR_RUNS.replace_all(&lower, " ");
    WHITESPACE_RUNS.replace_all(&spaced, " ").trim().to_string()
}

/// Shorthand for the common non-optional case.
pub fn normalize_str(raw: &str) -> String {
    normalize(Some(raw))
}

/// Display form of a raw shape label: separators become spaces, case is kept.
pub fn display_form(raw: &str) -> String {
    raw.replace(['-', '_'], " ").trim().to_string()
}
