//! Viewport geometry: framing a set of shapes and the zoom buttons.

use crate::errors::ExplorerError;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A box is usable for framing when all coordinates are finite and the
    /// extent is not negative.
    pub fn is_usable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Pan/zoom applied to the map group: a point `p` is drawn at `p * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewportTransform {
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }

    /// Multiply the scale by `factor` keeping the canvas centre fixed on screen.
    /// The resulting scale is clamped to `bounds`.
    pub fn scale_by(&self, factor: f64, canvas: CanvasSize, bounds: ZoomBounds) -> Self {
        let scale = bounds.clamp(self.scale * factor);
        let (px, py) = (canvas.width / 2.0, canvas.height / 2.0);
        // Map point currently under the centre.
        let wx = (px - self.translate_x) / self.scale;
        let wy = (py - self.translate_y) / self.scale;
        Self {
            translate_x: px - wx * scale,
            translate_y: py - wy * scale,
            scale,
        }
    }

    /// SVG `transform` attribute value.
    pub fn to_svg_transform(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Smallest box containing every box in `boxes`, `None` when empty.
pub fn union_bbox<'a, I>(boxes: I) -> Option<BBox>
where
    I: IntoIterator<Item = &'a BBox>,
{
    let mut iter = boxes.into_iter();
    let first = iter.next()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());
    for b in iter {
        min_x = min_x.min(b.x);
        min_y = min_y.min(b.y);
        max_x = max_x.max(b.right());
        max_y = max_y.max(b.bottom());
    }
    Some(BBox::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Compute the transform that centres the union of `bboxes` on the canvas and
/// scales it to fill `margin_factor` of the limiting dimension.
///
/// The scale is capped at `zoom.max` and floored at `zoom.min`, so a bigger
/// union never gets a bigger scale. A degenerate (zero-area) union zooms to
/// `zoom.max`.
pub fn frame(
    bboxes: &[BBox],
    canvas: CanvasSize,
    zoom: ZoomBounds,
    margin_factor: f64,
) -> Result<ViewportTransform, ExplorerError> {
    let union = union_bbox(bboxes.iter().filter(|b| b.is_usable()))
        .ok_or_else(|| ExplorerError::NoShapes(format!("{} box(es)", bboxes.len())))?;
    let (cx, cy) = union.center();
    let extent = (union.width / canvas.width).max(union.height / canvas.height);
    let fit = if extent > 0.0 {
        margin_factor / extent
    } else {
        f64::INFINITY
    };
    let scale = fit.min(zoom.max).max(zoom.min);
    Ok(ViewportTransform {
        translate_x: canvas.width / 2.0 - scale * cx,
        translate_y: canvas.height / 2.0 - scale * cy,
        scale,
    })
}
