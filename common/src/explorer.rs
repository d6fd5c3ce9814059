//! One map explorer per page: owns every piece of state and turns UI events
//! into [`Effect`]s for the rendering surface.
//!
//! All entry points are synchronous and never panic. Failures come back as
//! [`ExplorerError`] after being logged; the page simply stays as it was.

use crate::catalog::{CountryCatalog, CountryRecord};
use crate::config::ExplorerConfig;
use crate::content::{ContentDataset, MediaItem, Playlist};
use crate::errors::ExplorerError;
use crate::highlight::{highlight_targets, hover_fill, search_targets, Fill};
use crate::matching::shapes_for_selection;
use crate::schedule::{ScheduledTask, TaskKind};
use crate::selection::{Selection, SelectionController, Transition};
use crate::shapes::Shape;
use crate::suggestions::{suggest, KeyCode, SuggestionCursor};
use crate::viewport::{frame, BBox, ViewportTransform};
use serde::Serialize;

/// A request to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Effect {
    /// Outline colour for the listed shapes, set once when the map loads.
    Outline {
        shapes: Vec<usize>,
        color: String,
    },
    Paint {
        shapes: Vec<usize>,
        fill: Fill,
        color: String,
    },
    /// Show the selected country's name and, when known, its playlist.
    ShowCountry {
        name: String,
        playlist: Option<Playlist>,
    },
    ActivateMedia {
        index: usize,
        item: MediaItem,
    },
    Transform {
        transform: ViewportTransform,
        duration_ms: u64,
    },
    ScrollToContent,
    /// Arm a timer; when it fires, call back with the ticket.
    Schedule {
        task: ScheduledTask,
    },
    ShowSuggestions {
        items: Vec<CountryRecord>,
    },
    HideSuggestions,
    HighlightSuggestion {
        index: usize,
    },
    SetSearchText {
        text: String,
    },
}

/// The rendering collaborator.
pub trait MapSurface {
    fn apply(&mut self, effect: &Effect);

    fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ContentState {
    Pending,
    Ready(ContentDataset),
    Unavailable,
}

#[derive(Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    shapes: Vec<Shape>,
    catalog: Option<CountryCatalog>,
    content: ContentState,
    controller: SelectionController,
    fills: Vec<Fill>,
    transform: ViewportTransform,
    suggestions: SuggestionCursor,
    search_term: String,
    playlist: Option<Playlist>,
}

impl Explorer {
    pub fn new(config: ExplorerConfig) -> Result<Self, ExplorerError> {
        config.validate()?;
        let controller = SelectionController::new(config.frame_delay_ms, config.scroll_delay_ms);
        let transform = home_transform(&config);
        Ok(Self {
            config,
            shapes: Vec::new(),
            catalog: None,
            content: ContentState::Pending,
            controller,
            fills: Vec::new(),
            transform,
            suggestions: SuggestionCursor::default(),
            search_term: String::new(),
            playlist: None,
        })
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Take ownership of the map's shapes and build the catalog.
    /// Every shape gets the outline colour and starts with the default fill.
    pub fn load_shapes(&mut self, shapes: Vec<Shape>) -> Vec<Effect> {
        let catalog = CountryCatalog::build(&shapes);
        log::info!(
            "Map loaded: {} shape(s), {} countries",
            shapes.len(),
            catalog.len()
        );
        self.fills = vec![Fill::Default; shapes.len()];
        self.shapes = shapes;
        self.catalog = Some(catalog);
        let outline = Effect::Outline {
            shapes: (0..self.shapes.len()).collect(),
            color: self.config.palette.stroke.clone(),
        };
        vec![outline, self.paint_all(Fill::Default)]
    }

    /// Parse the content dataset. A broken dataset still completes loading:
    /// selection keeps working, only without content.
    pub fn load_content(&mut self, json: &str) -> Result<usize, ExplorerError> {
        match ContentDataset::from_json(json) {
            Ok(dataset) => {
                let count = dataset.len();
                log::info!("Content dataset loaded: {} countries", count);
                self.content = ContentState::Ready(dataset);
                Ok(count)
            }
            Err(err) => {
                self.content_unavailable(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_content(&mut self, dataset: ContentDataset) {
        self.content = ContentState::Ready(dataset);
    }

    /// The content fetch failed outright.
    pub fn content_unavailable(&mut self, reason: &str) {
        log::warn!("Content dataset unavailable: {}", reason);
        self.content = ContentState::Unavailable;
    }

    /// Both the shapes and the content fetch have completed.
    pub fn is_ready(&self) -> bool {
        self.catalog.is_some() && self.content != ContentState::Pending
    }

    pub fn catalog(&self) -> Option<&CountryCatalog> {
        self.catalog.as_ref()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.controller.current()
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn fill_of(&self, shape: usize) -> Option<Fill> {
        self.fills.get(shape).copied()
    }

    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    pub fn suggestions(&self) -> &SuggestionCursor {
        &self.suggestions
    }

    pub fn select_by_name(&mut self, term: &str, now_ms: u64) -> Result<Vec<Effect>, ExplorerError> {
        let catalog = ready_catalog(&self.catalog, &self.content)?;
        let transition = self.controller.select_by_name(term, catalog, now_ms)?;
        Ok(self.apply_transition(transition))
    }

    pub fn select_by_identifier(
        &mut self,
        identifier: &str,
        now_ms: u64,
    ) -> Result<Vec<Effect>, ExplorerError> {
        let catalog = ready_catalog(&self.catalog, &self.content)?;
        let transition = self
            .controller
            .select_by_identifier(identifier, catalog, now_ms)?;
        Ok(self.apply_transition(transition))
    }

    /// A click on a shape selects by its identifier, falling back to its
    /// display name.
    pub fn click_shape(&mut self, index: usize, now_ms: u64) -> Result<Vec<Effect>, ExplorerError> {
        let shape = self
            .shapes
            .get(index)
            .ok_or_else(|| ExplorerError::NoMatch(format!("shape #{}", index)))?;
        let identifier = shape.identifier().map(str::to_string);
        let name = shape.display_name();
        let Some(identifier) = identifier else {
            return Err(ExplorerError::NoMatch(format!("shape #{}", index)));
        };
        match self.select_by_identifier(&identifier, now_ms) {
            Err(ExplorerError::NoMatch(_)) => match name {
                Some(name) => self.select_by_name(&name, now_ms),
                None => Err(ExplorerError::NoMatch(identifier)),
            },
            other => other,
        }
    }

    pub fn hover_shape(&mut self, index: usize, entering: bool) -> Vec<Effect> {
        let Some(current) = self.fills.get(index).copied() else {
            return Vec::new();
        };
        match hover_fill(current, entering) {
            Some(fill) if fill != current => vec![self.paint(vec![index], fill)],
            _ => Vec::new(),
        }
    }

    /// Text typed into the search box: refresh suggestions and the live map
    /// highlight. Clearing the box restores the selection highlight.
    pub fn search_input(&mut self, text: &str) -> Vec<Effect> {
        self.search_term = text.trim().to_lowercase();
        let mut effects = Vec::new();

        let items = match &self.catalog {
            Some(catalog) => suggest(&self.search_term, catalog, self.config.suggestion_limit),
            None => Vec::new(),
        };
        if items.is_empty() {
            self.suggestions.hide();
            effects.push(Effect::HideSuggestions);
        } else {
            self.suggestions.show(items.clone());
            effects.push(Effect::ShowSuggestions { items });
        }

        if self.shapes.is_empty() {
            return effects;
        }
        effects.push(self.paint_all(Fill::Default));
        if self.search_term.is_empty() {
            if let Some(selection) = self.controller.current().cloned() {
                effects.extend(self.highlight_selection(&selection));
            }
        } else {
            let targets = search_targets(&self.shapes, &self.search_term);
            if !targets.is_empty() {
                effects.push(self.paint(targets, Fill::Hover));
            }
        }
        effects
    }

    pub fn key_down(&mut self, key: KeyCode, now_ms: u64) -> Result<Vec<Effect>, ExplorerError> {
        match key {
            KeyCode::Down => Ok(self
                .suggestions
                .down()
                .map(|index| vec![Effect::HighlightSuggestion { index }])
                .unwrap_or_default()),
            KeyCode::Up => Ok(self
                .suggestions
                .up()
                .map(|index| vec![Effect::HighlightSuggestion { index }])
                .unwrap_or_default()),
            KeyCode::Escape => {
                self.suggestions.hide();
                Ok(vec![Effect::HideSuggestions])
            }
            KeyCode::Enter => match self.suggestions.active() {
                Some(index) => self.choose_suggestion(index, now_ms),
                None => {
                    let term = self.search_term.clone();
                    if term.is_empty() {
                        return Ok(Vec::new());
                    }
                    let mut effects = self.select_by_name(&term, now_ms)?;
                    self.suggestions.hide();
                    effects.push(Effect::HideSuggestions);
                    Ok(effects)
                }
            },
        }
    }

    /// Mouse hover over a suggestion entry.
    pub fn hover_suggestion(&mut self, index: usize) -> Vec<Effect> {
        match self.suggestions.set_active(index) {
            Some(active) if active == index => vec![Effect::HighlightSuggestion { index }],
            _ => Vec::new(),
        }
    }

    /// Select a visible suggestion (click or Enter on the highlighted entry).
    pub fn choose_suggestion(
        &mut self,
        index: usize,
        now_ms: u64,
    ) -> Result<Vec<Effect>, ExplorerError> {
        ready_catalog(&self.catalog, &self.content)?;
        let record = self
            .suggestions
            .items()
            .get(index)
            .cloned()
            .ok_or_else(|| ExplorerError::NoMatch(format!("suggestion #{}", index)))?;
        let transition = self.controller.select(&record, now_ms);
        let mut effects = vec![Effect::SetSearchText {
            text: record.name.clone(),
        }];
        self.search_term = record.name.to_lowercase();
        effects.extend(self.apply_transition(transition));
        self.suggestions.hide();
        effects.push(Effect::HideSuggestions);
        Ok(effects)
    }

    /// Song buttons: switch the shown media item.
    pub fn activate_media(&mut self, index: usize) -> Vec<Effect> {
        let Some(playlist) = self.playlist.as_mut() else {
            return Vec::new();
        };
        match playlist.activate(index) {
            Some(item) => vec![Effect::ActivateMedia {
                index,
                item: item.clone(),
            }],
            None => Vec::new(),
        }
    }

    pub fn zoom_in(&mut self) -> Vec<Effect> {
        self.zoom_by(self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Vec<Effect> {
        self.zoom_by(1.0 / self.config.zoom_step)
    }

    pub fn reset_zoom(&mut self) -> Vec<Effect> {
        self.transform = home_transform(&self.config);
        vec![Effect::Transform {
            transform: self.transform,
            duration_ms: self.config.reset_duration_ms,
        }]
    }

    fn zoom_by(&mut self, factor: f64) -> Vec<Effect> {
        self.transform = self
            .transform
            .scale_by(factor, self.config.canvas, self.config.zoom);
        vec![Effect::Transform {
            transform: self.transform,
            duration_ms: self.config.zoom_step_duration_ms,
        }]
    }

    /// A timer armed by [`Effect::Schedule`] fired. Stale tickets do nothing.
    pub fn run_task(&mut self, ticket: u64) -> Vec<Effect> {
        match self.controller.take_task(ticket) {
            Some(task) => self.execute(task),
            None => {
                log::debug!("Task {} is stale or already done", ticket);
                Vec::new()
            }
        }
    }

    /// Run every task due at `now_ms`, for tick-driven adapters.
    pub fn run_due(&mut self, now_ms: u64) -> Vec<Effect> {
        self.controller
            .drain_due(now_ms)
            .into_iter()
            .flat_map(|task| self.execute(task))
            .collect()
    }

    fn execute(&mut self, task: ScheduledTask) -> Vec<Effect> {
        match task.kind {
            TaskKind::Frame => match self.frame_selection() {
                Ok(transform) => {
                    self.transform = transform;
                    vec![Effect::Transform {
                        transform,
                        duration_ms: self.config.frame_duration_ms,
                    }]
                }
                Err(err) => {
                    log::warn!("Skipping zoom: {}", err);
                    Vec::new()
                }
            },
            TaskKind::ScrollIntoView => vec![Effect::ScrollToContent],
        }
    }

    /// Transform framing every shape of the current selection.
    pub fn frame_selection(&self) -> Result<ViewportTransform, ExplorerError> {
        let selection = self
            .controller
            .current()
            .ok_or_else(|| ExplorerError::NoShapes("no selection".to_string()))?;
        let targets = shapes_for_selection(&self.shapes, &selection.identifier, &selection.name);
        let boxes: Vec<BBox> = targets
            .iter()
            .filter_map(|&i| match self.shapes[i].usable_bbox() {
                Ok(bbox) => Some(bbox),
                Err(err) => {
                    log::warn!("{}", err);
                    None
                }
            })
            .collect();
        frame(
            &boxes,
            self.config.canvas,
            self.config.zoom,
            self.config.margin_factor,
        )
        .map_err(|_| ExplorerError::NoShapes(selection.name.clone()))
    }

    fn apply_transition(&mut self, transition: Transition) -> Vec<Effect> {
        let mut effects = Vec::new();
        if transition.highlight {
            effects.push(self.paint_all(Fill::Default));
            effects.extend(self.highlight_selection(&transition.selection));
        }
        effects.push(self.show_country(&transition.load_content));
        effects.extend(
            transition
                .scheduled
                .into_iter()
                .map(|task| Effect::Schedule { task }),
        );
        effects
    }

    fn highlight_selection(&mut self, selection: &Selection) -> Option<Effect> {
        let targets = highlight_targets(&self.shapes, &selection.identifier, &selection.name);
        log::debug!(
            "Highlighted {} path(s) for {}",
            targets.len(),
            selection.name
        );
        if targets.is_empty() {
            log::warn!("No paths found for country: {}", selection.name);
            return None;
        }
        Some(self.paint(targets, Fill::Selected))
    }

    fn show_country(&mut self, name: &str) -> Effect {
        self.playlist = match &self.content {
            ContentState::Ready(dataset) => match dataset.lookup(name) {
                Some(items) => Some(Playlist::new(name, items)),
                None => {
                    log::debug!("No content for {}", name);
                    None
                }
            },
            ContentState::Unavailable | ContentState::Pending => {
                log::warn!("{}", ExplorerError::DatasetUnavailable(name.to_string()));
                None
            }
        };
        Effect::ShowCountry {
            name: name.to_string(),
            playlist: self.playlist.clone(),
        }
    }

    fn paint_all(&mut self, fill: Fill) -> Effect {
        let all = (0..self.shapes.len()).collect();
        self.paint(all, fill)
    }

    fn paint(&mut self, shapes: Vec<usize>, fill: Fill) -> Effect {
        for &i in &shapes {
            if let Some(slot) = self.fills.get_mut(i) {
                *slot = fill;
            }
        }
        Effect::Paint {
            shapes,
            fill,
            color: fill.color(&self.config.palette).to_string(),
        }
    }
}

/// Resting view: no pan, scale 1 brought within the zoom bounds and
/// centred like the zoom buttons do.
fn home_transform(config: &ExplorerConfig) -> ViewportTransform {
    ViewportTransform::identity().scale_by(1.0, config.canvas, config.zoom)
}

fn ready_catalog<'a>(
    catalog: &'a Option<CountryCatalog>,
    content: &ContentState,
) -> Result<&'a CountryCatalog, ExplorerError> {
    match catalog {
        Some(catalog) if *content != ContentState::Pending => Ok(catalog),
        _ => {
            log::debug!("Selection ignored: map data still loading");
            Err(ExplorerError::NotReady)
        }
    }
}
