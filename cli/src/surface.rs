//! Renders explorer effects as lines of text.

use explorer_common::{Effect, MapSurface, Shape, TaskKind};

/// A [`MapSurface`] that records one line per effect. Shape indices are
/// printed as the shape's identifier, or `#index` for anonymous paths.
pub struct TerminalSurface {
    labels: Vec<String>,
    json: bool,
    lines: Vec<String>,
}

impl TerminalSurface {
    pub fn new(shapes: &[Shape], json: bool) -> Self {
        let labels = shapes
            .iter()
            .enumerate()
            .map(|(i, s)| {
                s.identifier()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", i))
            })
            .collect();
        Self {
            labels,
            json,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("?")
    }

    fn describe(&self, effect: &Effect) -> String {
        match effect {
            Effect::Outline { shapes, color } => {
                format!("outline {} shapes with {}", shapes.len(), color)
            }
            Effect::Paint {
                shapes,
                fill,
                color,
            } => {
                if shapes.len() == self.labels.len() && shapes.len() > 3 {
                    return format!("paint {:?} {} on all {} shapes", fill, color, shapes.len());
                }
                let names: Vec<&str> = shapes.iter().map(|&i| self.label(i)).collect();
                format!("paint {:?} {} on {}", fill, color, names.join(", "))
            }
            Effect::ShowCountry { name, playlist } => match playlist {
                Some(playlist) => format!(
                    "show {} with {} item(s), playing '{}'",
                    name,
                    playlist.items.len(),
                    playlist.current().map(|i| i.title.as_str()).unwrap_or("")
                ),
                None => format!("show {} without content", name),
            },
            Effect::ActivateMedia { index, item } => {
                format!("play item {}: {} <{}>", index, item.title, item.url)
            }
            Effect::Transform {
                transform,
                duration_ms,
            } => format!(
                "transform {} over {} ms",
                transform.to_svg_transform(),
                duration_ms
            ),
            Effect::ScrollToContent => "scroll content into view".to_string(),
            Effect::Schedule { task } => {
                let kind = match task.kind {
                    TaskKind::Frame => "frame",
                    TaskKind::ScrollIntoView => "scroll",
                };
                format!("schedule {} in {} ms", kind, task.delay_ms)
            }
            Effect::ShowSuggestions { items } => {
                let names: Vec<&str> = items.iter().map(|r| r.name.as_str()).collect();
                format!("suggest {}", names.join(", "))
            }
            Effect::HideSuggestions => "hide suggestions".to_string(),
            Effect::HighlightSuggestion { index } => format!("highlight suggestion {}", index),
            Effect::SetSearchText { text } => format!("search box: {}", text),
        }
    }
}

impl MapSurface for TerminalSurface {
    fn apply(&mut self, effect: &Effect) {
        let line = if self.json {
            serde_json::to_string(effect).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
        } else {
            self.describe(effect)
        };
        self.lines.push(line);
    }
}
