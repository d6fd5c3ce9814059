//! Per-country media content shown next to the map.

use crate::errors::ExplorerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    name: String,
    #[serde(default)]
    top_songs: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    countries: Vec<CountryEntry>,
}

/// Read-only mapping from country display name to its playlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDataset {
    by_name: HashMap<String, Vec<MediaItem>>,
}

impl ContentDataset {
    /// Parse `{"countries": [{"name": .., "top_songs": [{"title": .., "url": ..}]}]}`.
    /// When a name repeats, the first entry is kept.
    pub fn from_json(json: &str) -> Result<Self, ExplorerError> {
        let file: DatasetFile = serde_json::from_str(json)
            .map_err(|e| ExplorerError::DatasetUnavailable(e.to_string()))?;
        let mut by_name = HashMap::with_capacity(file.countries.len());
        for entry in file.countries {
            by_name.entry(entry.name).or_insert(entry.top_songs);
        }
        Ok(Self { by_name })
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<MediaItem>)>,
    {
        Self {
            by_name: entries.into_iter().collect(),
        }
    }

    /// Exact-name lookup. Countries without songs count as a miss.
    pub fn lookup(&self, name: &str) -> Option<&[MediaItem]> {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .filter(|items| !items.is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// The media list of the selected country and which entry is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub country: String,
    pub items: Vec<MediaItem>,
    pub active: usize,
}

impl Playlist {
    /// A fresh playlist always starts on its first item.
    pub fn new(country: &str, items: &[MediaItem]) -> Self {
        Self {
            country: country.to_string(),
            items: items.to_vec(),
            active: 0,
        }
    }

    /// Switch to `index`; out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> Option<&MediaItem> {
        let item = self.items.get(index)?;
        self.active = index;
        Some(item)
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.active)
    }
}
