//! Drag-and-drop rescheduling.
//!
//! The in-progress drag is a tagged state machine rather than a bag of
//! nullable fields. Dropping a plain event commits the move immediately;
//! dropping a recurring occurrence parks the machine in
//! `PendingSeriesDecision` until the user picks a scope. Whatever happens
//! (success, failure, cancel), the machine always lands back in `Idle` so
//! the UI can never get stuck mid-drag.

use chrono::NaiveDate;

use crate::error::PlanResult;
use crate::event::{Event, EventPatch};
use crate::repository::{EditScope, EventRepository};
use crate::store::EventStore;

/// Where a drag currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        event: Event,
    },
    /// Pointer is over a droppable date cell; purely a visual affordance,
    /// nothing is committed yet.
    DragOverTarget {
        event: Event,
        target: NaiveDate,
    },
    /// A recurring occurrence was dropped; waiting for the user to choose
    /// between moving this occurrence or the whole series.
    PendingSeriesDecision {
        event: Event,
        target: NaiveDate,
    },
}

/// What a drop ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing to commit (no drag in progress, same-date drop, or cancel).
    NoChange,
    /// The move was applied.
    Moved,
    /// A series decision is pending; call [`DragReconciler::resolve`].
    AwaitingDecision,
}

/// The user's answer to the series-scope question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesChoice {
    SingleOnly,
    WholeSeries,
    Cancel,
}

#[derive(Default)]
pub struct DragReconciler {
    state: DragState,
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

impl DragReconciler {
    pub fn new() -> Self {
        DragReconciler::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Begin dragging an event card.
    pub fn drag_start(&mut self, event: Event) {
        self.state = DragState::Dragging { event };
    }

    /// Pointer entered a droppable date cell.
    pub fn drag_over(&mut self, target: NaiveDate) {
        self.state = match std::mem::take(&mut self.state) {
            DragState::Dragging { event } | DragState::DragOverTarget { event, .. } => {
                DragState::DragOverTarget { event, target }
            }
            other => other,
        };
    }

    /// The drag ended outside any valid target; nothing is committed.
    pub fn drag_abort(&mut self) {
        self.state = DragState::Idle;
    }

    /// Drop the dragged event onto a date cell.
    ///
    /// Update failures propagate to the caller, but the machine still
    /// resets to `Idle`.
    pub async fn drop_on<S: EventStore>(
        &mut self,
        repo: &mut EventRepository<S>,
        target: NaiveDate,
    ) -> PlanResult<DropOutcome> {
        let event = match std::mem::take(&mut self.state) {
            DragState::Dragging { event } | DragState::DragOverTarget { event, .. } => event,
            other => {
                self.state = other;
                return Ok(DropOutcome::NoChange);
            }
        };

        if event.date == target {
            return Ok(DropOutcome::NoChange);
        }

        if event.is_recurring() {
            self.state = DragState::PendingSeriesDecision { event, target };
            return Ok(DropOutcome::AwaitingDecision);
        }

        let result = repo
            .update(event.id, EventPatch::move_to(target), EditScope::Single)
            .await;
        self.state = DragState::Idle;
        result.map(|_| DropOutcome::Moved)
    }

    /// Resolve a pending series decision.
    pub async fn resolve<S: EventStore>(
        &mut self,
        repo: &mut EventRepository<S>,
        choice: SeriesChoice,
    ) -> PlanResult<DropOutcome> {
        let (event, target) = match std::mem::take(&mut self.state) {
            DragState::PendingSeriesDecision { event, target } => (event, target),
            other => {
                self.state = other;
                return Ok(DropOutcome::NoChange);
            }
        };

        let scope = match choice {
            SeriesChoice::SingleOnly => EditScope::Single,
            SeriesChoice::WholeSeries => EditScope::Series,
            SeriesChoice::Cancel => return Ok(DropOutcome::NoChange),
        };

        let result = repo
            .update(event.id, EventPatch::move_to(target), scope)
            .await;
        self.state = DragState::Idle;
        result.map(|_| DropOutcome::Moved)
    }
}
