//! Delayed side effects of a selection.
//!
//! Every selection starts a new generation. Tasks remember the generation they
//! were scheduled in; once a newer selection exists they are dropped instead of
//! run, so a slow zoom from an earlier click never overrides a newer one.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskKind {
    /// Pan/zoom the map onto the selection.
    Frame,
    /// Scroll the content panel into view once the zoom has settled.
    ScrollIntoView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub ticket: u64,
    pub generation: u64,
    pub due_at_ms: u64,
    pub delay_ms: u64,
    pub kind: TaskKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    next_ticket: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new generation and discard everything still pending.
    pub fn begin_generation(&mut self) -> u64 {
        if !self.pending.is_empty() {
            log::debug!(
                "Discarding {} stale task(s) of generation {}",
                self.pending.len(),
                self.generation
            );
        }
        self.pending.clear();
        self.generation += 1;
        self.generation
    }

    pub fn schedule(&mut self, kind: TaskKind, now_ms: u64, delay_ms: u64) -> ScheduledTask {
        self.next_ticket += 1;
        let task = ScheduledTask {
            ticket: self.next_ticket,
            generation: self.generation,
            due_at_ms: now_ms.saturating_add(delay_ms),
            delay_ms,
            kind,
        };
        self.pending.push(task);
        task
    }

    /// Claim a task by ticket, for adapters that arm one timer per task.
    /// Unknown, already-run and superseded tickets yield `None`.
    pub fn take(&mut self, ticket: u64) -> Option<ScheduledTask> {
        let pos = self.pending.iter().position(|t| t.ticket == ticket)?;
        let task = self.pending.remove(pos);
        (task.generation == self.generation).then_some(task)
    }

    /// Remove and return every current-generation task due at `now_ms`,
    /// earliest first.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<ScheduledTask> {
        let generation = self.generation;
        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .filter(|t| t.generation == generation)
            .partition(|t| t.due_at_ms <= now_ms);
        self.pending = rest;
        due.sort_by_key(|t| (t.due_at_ms, t.ticket));
        due
    }

    pub fn pending(&self) -> &[ScheduledTask] {
        &self.pending
    }
}
