//! The single current selection and the side effects a selection triggers.

use crate::catalog::{CountryCatalog, CountryRecord};
use crate::errors::ExplorerError;
use crate::matching::{closest_name, find_best_match, resolve_by_identifier};
use crate::schedule::{ScheduledTask, Scheduler, TaskKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub name: String,
    pub identifier: String,
}

impl From<&CountryRecord> for Selection {
    fn from(record: &CountryRecord) -> Self {
        Self {
            name: record.name.clone(),
            identifier: record.identifier.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selected(Selection),
}

/// What a successful selection asks the surrounding page to do.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub selection: Selection,
    /// Paint the selection; runs immediately.
    pub highlight: bool,
    /// Load content for this canonical name; runs immediately.
    pub load_content: String,
    /// Frame and scroll, in due order.
    pub scheduled: Vec<ScheduledTask>,
}

/// Owns the selection state. There is no way back to `Idle`: a selection is
/// only replaced by another one. Re-selecting the current country fires all
/// side effects again, which doubles as "recenter".
#[derive(Debug)]
pub struct SelectionController {
    state: SelectionState,
    scheduler: Scheduler,
    frame_delay_ms: u64,
    scroll_delay_ms: u64,
}

impl SelectionController {
    pub fn new(frame_delay_ms: u64, scroll_delay_ms: u64) -> Self {
        Self {
            state: SelectionState::Idle,
            scheduler: Scheduler::new(),
            frame_delay_ms,
            scroll_delay_ms,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current(&self) -> Option<&Selection> {
        match &self.state {
            SelectionState::Selected(selection) => Some(selection),
            SelectionState::Idle => None,
        }
    }

    pub fn select_by_name(
        &mut self,
        term: &str,
        catalog: &CountryCatalog,
        now_ms: u64,
    ) -> Result<Transition, ExplorerError> {
        match find_best_match(term, catalog) {
            Some(record) => Ok(self.select(record, now_ms)),
            None => Err(no_match(term, catalog)),
        }
    }

    pub fn select_by_identifier(
        &mut self,
        identifier: &str,
        catalog: &CountryCatalog,
        now_ms: u64,
    ) -> Result<Transition, ExplorerError> {
        let current = self.current().map(|s| s.name.clone());
        match resolve_by_identifier(identifier, catalog, current.as_deref()) {
            Some(record) => Ok(self.select(record, now_ms)),
            None => Err(no_match(identifier, catalog)),
        }
    }

    /// Enter `Selected(record)` and schedule the delayed effects. Pending
    /// tasks of the previous selection are invalidated.
    pub fn select(&mut self, record: &CountryRecord, now_ms: u64) -> Transition {
        let selection = Selection::from(record);
        let generation = self.scheduler.begin_generation();
        log::info!(
            "Selected {} ({}), generation {}",
            selection.name,
            selection.identifier,
            generation
        );
        let frame = self
            .scheduler
            .schedule(TaskKind::Frame, now_ms, self.frame_delay_ms);
        let scroll = self
            .scheduler
            .schedule(TaskKind::ScrollIntoView, now_ms, self.scroll_delay_ms);
        let mut scheduled = vec![frame, scroll];
        scheduled.sort_by_key(|t| (t.due_at_ms, t.ticket));
        self.state = SelectionState::Selected(selection.clone());
        Transition {
            load_content: selection.name.clone(),
            selection,
            highlight: true,
            scheduled,
        }
    }

    pub fn take_task(&mut self, ticket: u64) -> Option<ScheduledTask> {
        self.scheduler.take(ticket)
    }

    pub fn drain_due(&mut self, now_ms: u64) -> Vec<ScheduledTask> {
        self.scheduler.drain_due(now_ms)
    }
}

fn no_match(term: &str, catalog: &CountryCatalog) -> ExplorerError {
    match closest_name(term, catalog) {
        Some(hint) => log::info!("No country matches '{}', closest is '{}'", term, hint.name),
        None => log::info!("No country matches '{}'", term),
    }
    ExplorerError::NoMatch(term.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    fn catalog() -> CountryCatalog {
        let shapes = vec![
            Shape::with_id("CA").named("Canada"),
            Shape::with_id("MX").named("Mexico"),
            Shape::with_id("US").named("United States"),
        ];
        CountryCatalog::build(&shapes)
    }

    #[test]
    fn test_idle_until_first_selection() {
        let controller = SelectionController::new(100, 800);
        assert_eq!(controller.state(), &SelectionState::Idle);
        assert!(controller.current().is_none());
    }

    #[test]
    fn test_select_by_name_transition() {
        let catalog = catalog();
        let mut controller = SelectionController::new(100, 800);
        let t = controller.select_by_name("usa", &catalog, 1_000).unwrap();
        assert_eq!(t.selection.name, "United States");
        assert_eq!(t.load_content, "United States");
        assert!(t.highlight);
        assert_eq!(t.scheduled.len(), 2);
        assert_eq!(t.scheduled[0].kind, TaskKind::Frame);
        assert_eq!(t.scheduled[0].due_at_ms, 1_100);
        assert_eq!(t.scheduled[1].kind, TaskKind::ScrollIntoView);
        assert_eq!(t.scheduled[1].due_at_ms, 1_800);
        assert_eq!(controller.current().unwrap().identifier, "US");
    }

    #[test]
    fn test_miss_leaves_state_unchanged() {
        let catalog = catalog();
        let mut controller = SelectionController::new(100, 800);
        controller.select_by_name("Mexico", &catalog, 0).unwrap();
        let err = controller
            .select_by_name("xx-nonexistent", &catalog, 10)
            .unwrap_err();
        assert_eq!(err, ExplorerError::NoMatch("xx-nonexistent".to_string()));
        assert_eq!(controller.current().unwrap().name, "Mexico");
        // The earlier selection's tasks are still live.
        assert_eq!(controller.drain_due(u64::MAX).len(), 2);
    }

    #[test]
    fn test_reselect_refires_and_supersedes() {
        let catalog = catalog();
        let mut controller = SelectionController::new(100, 800);
        let first = controller.select_by_name("Canada", &catalog, 0).unwrap();
        let second = controller.select_by_name("Canada", &catalog, 50).unwrap();
        assert_eq!(first.selection, second.selection);
        assert_eq!(second.scheduled.len(), 2);

        assert!(controller.take_task(first.scheduled[0].ticket).is_none());
        let frame = controller.take_task(second.scheduled[0].ticket).unwrap();
        assert_eq!(frame.kind, TaskKind::Frame);
    }

    #[test]
    fn test_select_by_identifier_uses_current_selection() {
        let catalog = catalog();
        let mut controller = SelectionController::new(100, 800);
        assert!(controller
            .select_by_identifier("path-42", &catalog, 0)
            .is_err());
        controller.select_by_identifier("MX", &catalog, 0).unwrap();
        let t = controller
            .select_by_identifier("path-42", &catalog, 10)
            .unwrap();
        assert_eq!(t.selection.name, "Mexico");
    }
}
