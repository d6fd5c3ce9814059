use crate::normalize::normalize_str;
use crate::shapes::Shape;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One selectable country discovered on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    pub identifier: String,
    pub normalized_name: String,
}

impl CountryRecord {
    pub fn new(name: &str, identifier: &str) -> Self {
        Self {
            name: name.to_string(),
            identifier: identifier.to_string(),
            normalized_name: normalize_str(name),
        }
    }
}

/// Deduplicated, alphabetically sorted list of the countries on the map.
///
/// Built once when the map has loaded; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryCatalog {
    records: Vec<CountryRecord>,
}

impl CountryCatalog {
    /// Collect one record per distinct normalized name. Shapes without an
    /// identifier or a display name are skipped; the first shape seen for a
    /// name provides the record's identifier.
    pub fn build(shapes: &[Shape]) -> Self {
        let mut records: Vec<CountryRecord> = Vec::new();
        for shape in shapes {
            let (Some(identifier), Some(name)) = (shape.identifier(), shape.display_name()) else {
                continue;
            };
            let record = CountryRecord::new(&name, identifier);
            if record.normalized_name.is_empty()
                || records
                    .iter()
                    .any(|r| r.normalized_name == record.normalized_name)
            {
                continue;
            }
            records.push(record);
        }
        records.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        log::debug!(
            "Built country catalog: {} record(s) from {} shape(s)",
            records.len(),
            shapes.len()
        );
        Self { records }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a CountryCatalog {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Primary collation key: accents stripped, case folded.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Dictionary order that ignores accents and case first, then breaks ties on
/// the raw strings so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
