//! Which shapes get painted, and with what.

use crate::config::Palette;
use crate::matching::contains_either_way;
use crate::normalize::normalize_str;
use crate::shapes::Shape;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Default,
    Hover,
    Selected,
}

impl Fill {
    pub fn color<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            Fill::Default => &palette.default,
            Fill::Hover => &palette.hover,
            Fill::Selected => &palette.selected,
        }
    }
}

/// Shapes to paint as selected. First nonempty step wins:
/// 1. `id == identifier`
/// 2. `class == identifier`
/// 3. identifier containment either way (case-insensitive), or display name
///    containment either way with the selection name (normalized).
pub fn highlight_targets(shapes: &[Shape], identifier: &str, selection_name: &str) -> Vec<usize> {
    let by_id: Vec<usize> = indices(shapes, |s| s.id.as_deref() == Some(identifier));
    if !by_id.is_empty() {
        return by_id;
    }
    let by_class: Vec<usize> = indices(shapes, |s| s.class.as_deref() == Some(identifier));
    if !by_class.is_empty() {
        return by_class;
    }
    let id = identifier.to_lowercase();
    let name = normalize_str(selection_name);
    indices(shapes, |s| {
        let Some(shape_id) = s.identifier() else {
            return false;
        };
        let shape_name = s
            .display_name()
            .map(|n| normalize_str(&n))
            .unwrap_or_default();
        contains_either_way(&shape_id.to_lowercase(), &id)
            || contains_either_way(&shape_name, &name)
    })
}

/// Shapes whose normalized display name contains the typed term.
pub fn search_targets(shapes: &[Shape], term: &str) -> Vec<usize> {
    let term = normalize_str(term);
    if term.is_empty() {
        return Vec::new();
    }
    indices(shapes, |s| {
        s.display_name()
            .map(|n| normalize_str(&n).contains(&term))
            .unwrap_or(false)
    })
}

/// Fill for a hover transition, `None` when the shape keeps its fill.
pub fn hover_fill(current: Fill, entering: bool) -> Option<Fill> {
    match (current, entering) {
        (Fill::Selected, _) => None,
        (_, true) => Some(Fill::Hover),
        (_, false) => Some(Fill::Default),
    }
}

fn indices<F>(shapes: &[Shape], pred: F) -> Vec<usize>
where
    F: Fn(&Shape) -> bool,
{
    shapes
        .iter()
        .enumerate()
        .filter(|(_, s)| pred(s))
        .map(|(i, _)| i)
        .collect()
}
