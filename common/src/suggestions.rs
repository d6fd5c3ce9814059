//! Autocomplete for the country search box.

use crate::catalog::{CountryCatalog, CountryRecord};
use crate::normalize::normalize_str;

/// Records whose normalized or case-folded name contains the normalized term,
/// in catalog order, at most `limit` of them. An empty term suggests nothing.
pub fn suggest(term: &str, catalog: &CountryCatalog, limit: usize) -> Vec<CountryRecord> {
    let wanted = normalize_str(term);
    if wanted.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|r| r.normalized_name.contains(&wanted) || r.name.to_lowercase().contains(&wanted))
        .take(limit)
        .cloned()
        .collect()
}

/// Navigation keys forwarded by the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Up,
    Down,
    Enter,
    Escape,
}

impl KeyCode {
    /// Map a DOM `keyCode`; other keys are not navigation.
    pub fn from_dom(code: u32) -> Option<Self> {
        match code {
            38 => Some(KeyCode::Up),
            40 => Some(KeyCode::Down),
            13 => Some(KeyCode::Enter),
            27 => Some(KeyCode::Escape),
            _ => None,
        }
    }
}

/// The visible suggestion list and its keyboard-highlighted entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionCursor {
    items: Vec<CountryRecord>,
    active: Option<usize>,
}

impl SuggestionCursor {
    /// Replace the list. The highlighted entry is cleared.
    pub fn show(&mut self, items: Vec<CountryRecord>) {
        self.items = items;
        self.active = None;
    }

    pub fn hide(&mut self) {
        self.items.clear();
        self.active = None;
    }

    pub fn items(&self) -> &[CountryRecord] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&CountryRecord> {
        self.active.and_then(|i| self.items.get(i))
    }

    /// Mouse hover highlights an entry directly.
    pub fn set_active(&mut self, index: usize) -> Option<usize> {
        if index < self.items.len() {
            self.active = Some(index);
        }
        self.active
    }

    /// Next entry, wrapping to the first.
    pub fn down(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        self.active = Some(match self.active {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        });
        self.active
    }

    /// Previous entry, wrapping to the last.
    pub fn up(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.active = Some(match self.active {
            Some(i) if i > 0 => i - 1,
            _ => last,
        });
        self.active
    }
}
