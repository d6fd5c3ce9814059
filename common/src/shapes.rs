//! Map shapes as read from the rendered SVG.
//!
//! A shape is owned by the rendering surface; the core only reads its
//! attributes and its bounding box. Shape dumps are JSON arrays:
//!
//! ```json
//! [{"id": "BR", "name": "Brazil", "bbox": {"x": 610, "y": 470, "width": 180, "height": 190}}]
//! ```

use crate::errors::ExplorerError;
use crate::normalize::display_form;
use crate::viewport::BBox;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "data-name", alias = "data_name")]
    pub data_name: Option<String>,
    #[serde(default)]
    pub bbox: Option<BBox>,
}

type Accessor = fn(&Shape) -> Option<&str>;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn name_attr(shape: &Shape) -> Option<&str> {
    non_empty(&shape.name)
}

fn title_attr(shape: &Shape) -> Option<&str> {
    non_empty(&shape.title)
}

fn data_name_attr(shape: &Shape) -> Option<&str> {
    non_empty(&shape.data_name)
}

fn id_attr(shape: &Shape) -> Option<&str> {
    non_empty(&shape.id)
}

fn class_attr(shape: &Shape) -> Option<&str> {
    non_empty(&shape.class)
}

/// Attributes consulted for a shape's display name, in priority order.
const NAME_ACCESSORS: &[Accessor] = &[name_attr, title_attr, data_name_attr, id_attr, class_attr];

impl Shape {
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// The attribute used to address the shape: `id`, else `class`.
    pub fn identifier(&self) -> Option<&str> {
        id_attr(self).or_else(|| class_attr(self))
    }

    /// Raw label from the first non-empty name-ish attribute.
    pub fn raw_name(&self) -> Option<&str> {
        NAME_ACCESSORS.iter().find_map(|get| get(self))
    }

    /// Display name: the raw label with separators turned into spaces.
    pub fn display_name(&self) -> Option<String> {
        self.raw_name().map(display_form).filter(|n| !n.is_empty())
    }

    /// Bounding box usable for framing.
    pub fn usable_bbox(&self) -> Result<BBox, ExplorerError> {
        match self.bbox {
            Some(bbox) if bbox.is_usable() => Ok(bbox),
            _ => Err(ExplorerError::GeometryUnavailable(
                self.identifier().unwrap_or("<anonymous>").to_string(),
            )),
        }
    }
}

/// Parse a JSON shape dump.
pub fn shapes_from_json(json: &str) -> Result<Vec<Shape>, ExplorerError> {
    Ok(serde_json::from_str(json)?)
}
