//! Matching of free-text terms and shape identifiers against the country catalog.
//!
//! Two labels match when, after normalization:
//! 1. they are equal, or
//! 2. one contains the other, or
//! 3. they are the two spellings of a known alias pair.
//!
//! The rules are tried in that order. Empty labels never match anything.

use crate::catalog::{CountryCatalog, CountryRecord};
use crate::normalize::normalize_str;
use crate::shapes::Shape;

/// Long and short spellings of the same country. The short spelling must
/// appear as a whole word, so "uk" does not pull in "ukraine".
pub const ALIASES: &[(&str, &str)] = &[("united states", "usa"), ("united kingdom", "uk")];

/// Below this Jaro-Winkler similarity a catalog name is not offered as a hint.
const HINT_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    Contains,
    Alias,
}

fn has_word(haystack: &str, word: &str) -> bool {
    haystack.split(' ').any(|w| w == word)
}

fn alias_match(a: &str, b: &str) -> bool {
    ALIASES.iter().any(|(long, short)| {
        (a.contains(long) && has_word(b, short)) || (b.contains(long) && has_word(a, short))
    })
}

/// First rule under which the two labels match, if any.
pub fn match_rule(a: &str, b: &str) -> Option<MatchRule> {
    let (a, b) = (normalize_str(a), normalize_str(b));
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if a == b {
        Some(MatchRule::Exact)
    } else if a.contains(&b) || b.contains(&a) {
        Some(MatchRule::Contains)
    } else if alias_match(&a, &b) {
        Some(MatchRule::Alias)
    } else {
        None
    }
}

/// Symmetric label match.
pub fn matches(a: &str, b: &str) -> bool {
    match_rule(a, b).is_some()
}

/// Resolve a search term: the first record whose name normalizes to the term,
/// else the first record whose name matches it or whose identifier equals it
/// (case-insensitive). Identifiers are short codes, so they are never matched
/// by containment. Catalog order is alphabetical, so ties resolve
/// alphabetically.
pub fn find_best_match<'a>(term: &str, catalog: &'a CountryCatalog) -> Option<&'a CountryRecord> {
    let wanted = normalize_str(term);
    if wanted.is_empty() {
        return None;
    }
    catalog
        .iter()
        .find(|r| r.normalized_name == wanted)
        .or_else(|| {
            catalog.iter().find(|r| {
                matches(&r.normalized_name, &wanted) || normalize_str(&r.identifier) == wanted
            })
        })
}

pub(crate) fn contains_either_way(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Resolve a shape identifier. Tried in order, first hit wins:
/// exact identifier, identifier containment (case-insensitive), then the
/// record of the current selection when its name matches. The last step
/// covers multi-part countries whose extra shapes carry unrelated ids.
pub fn resolve_by_identifier<'a>(
    identifier: &str,
    catalog: &'a CountryCatalog,
    current_name: Option<&str>,
) -> Option<&'a CountryRecord> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }
    if let Some(record) = catalog.iter().find(|r| r.identifier == identifier) {
        return Some(record);
    }
    let lower = identifier.to_lowercase();
    if let Some(record) = catalog
        .iter()
        .find(|r| contains_either_way(&r.identifier.to_lowercase(), &lower))
    {
        return Some(record);
    }
    let current = current_name.map(normalize_str).filter(|n| !n.is_empty())?;
    catalog
        .iter()
        .find(|r| r.normalized_name == current)
        .or_else(|| catalog.iter().find(|r| matches(&r.normalized_name, &current)))
}

/// Indices of every shape belonging to a selected country: identifier equal
/// or containing either way, or display name containing either way.
pub fn shapes_for_selection(shapes: &[Shape], identifier: &str, name: &str) -> Vec<usize> {
    let id = identifier.to_lowercase();
    let name = normalize_str(name);
    shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| {
            let Some(shape_id) = shape.identifier() else {
                return false;
            };
            let shape_id = shape_id.to_lowercase();
            let shape_name = shape
                .display_name()
                .map(|n| normalize_str(&n))
                .unwrap_or_default();
            shape_id == id
                || contains_either_way(&shape_id, &id)
                || contains_either_way(&shape_name, &name)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Closest catalog name by Jaro-Winkler similarity, for "did you mean" hints.
pub fn closest_name<'a>(term: &str, catalog: &'a CountryCatalog) -> Option<&'a CountryRecord> {
    let wanted = normalize_str(term);
    if wanted.is_empty() {
        return None;
    }
    catalog
        .iter()
        .map(|r| (r, strsim::jaro_winkler(&r.normalized_name, &wanted)))
        .filter(|(_, score)| *score >= HINT_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(r, _)| r)
}
