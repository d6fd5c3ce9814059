//! Country matching and viewport framing for the interactive world map.
//!
//! The crate is UI-agnostic: adapters (the `cexp` CLI, the browser module)
//! feed shapes, content and user events into an [`Explorer`] and render the
//! [`Effect`]s it returns.

pub mod catalog;
pub mod config;
pub mod content;
pub mod errors;
pub mod explorer;
pub mod highlight;
pub mod matching;
pub mod normalize;
pub mod schedule;
pub mod selection;
pub mod shapes;
pub mod suggestions;
pub mod viewport;

pub use catalog::{locale_cmp, CountryCatalog, CountryRecord};
pub use config::{ExplorerConfig, Palette};
pub use content::{ContentDataset, MediaItem, Playlist};
pub use errors::ExplorerError;
pub use explorer::{Effect, Explorer, MapSurface};
pub use highlight::Fill;
pub use matching::{
    closest_name, find_best_match, match_rule, matches, resolve_by_identifier,
    shapes_for_selection, MatchRule,
};
pub use normalize::{normalize, normalize_str};
pub use schedule::{ScheduledTask, Scheduler, TaskKind};
pub use selection::{Selection, SelectionController, SelectionState, Transition};
pub use shapes::{shapes_from_json, Shape};
pub use suggestions::{suggest, KeyCode, SuggestionCursor};
pub use viewport::{frame, union_bbox, BBox, CanvasSize, ViewportTransform, ZoomBounds};
