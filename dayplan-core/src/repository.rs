//! Client-side event repository.
//!
//! Single CRUD façade over an [`EventStore`] backend. Recurring drafts are
//! materialized into sibling records up front; update/delete normalize the
//! single-occurrence vs. whole-series distinction; every successful
//! mutation is followed by a full refresh so the in-memory view matches
//! persisted state rather than trusting an optimistic merge.

use chrono::Duration;
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};
use crate::event::{Event, EventDraft, EventPatch, RepeatRule};
use crate::recurrence::expand_dates;
use crate::store::EventStore;

/// Whether an edit or delete targets one occurrence or the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    Single,
    Series,
}

pub struct EventRepository<S: EventStore> {
    store: S,
    events: Vec<Event>,
}

impl<S: EventStore> EventRepository<S> {
    pub fn new(store: S) -> Self {
        EventRepository {
            store,
            events: Vec::new(),
        }
    }

    /// The current in-memory view. Call [`refresh`](Self::refresh) first if
    /// the collection may have changed behind this client's back.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Access the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-sync the in-memory view from the backend.
    pub async fn refresh(&mut self) -> PlanResult<()> {
        self.events = self.store.list().await?;
        Ok(())
    }

    /// Create an event, materializing the full series for recurring drafts.
    ///
    /// All occurrences of a series go through the batch endpoint as one
    /// logical operation; on failure nothing is assumed about partial
    /// state — the next refresh resolves it.
    pub async fn create(&mut self, draft: EventDraft) -> PlanResult<Vec<Event>> {
        draft.validate()?;

        let created = if draft.is_recurring() {
            let dates = expand_dates(draft.date, &draft.repeat)?;
            let series_id = Uuid::new_v4();
            let drafts: Vec<EventDraft> = dates
                .into_iter()
                .map(|date| EventDraft {
                    date,
                    series_id: Some(series_id),
                    ..draft.clone()
                })
                .collect();
            self.store.create_batch(drafts).await?
        } else {
            vec![self.store.create(draft).await?]
        };

        self.refresh().await?;
        Ok(created)
    }

    /// Apply a patch to one occurrence or to every sibling of its series.
    ///
    /// `Single` on a recurring occurrence detaches it: the record keeps its
    /// new field values but stops repeating and leaves the series, so later
    /// series operations never touch it. `Series` patches shared fields on
    /// every sibling; a date change moves the anchor occurrence to the
    /// target date and shifts each sibling by the same number of days.
    pub async fn update(&mut self, id: Uuid, patch: EventPatch, scope: EditScope) -> PlanResult<()> {
        let anchor = self.find(id)?.clone();

        match scope {
            EditScope::Single => {
                let mut updated = anchor.clone();
                patch.apply_to(&mut updated);
                if anchor.is_recurring() {
                    updated.repeat = RepeatRule::none();
                    updated.series_id = None;
                }
                self.store.update(updated).await?;
            }
            EditScope::Series => {
                let siblings = self.siblings_of(&anchor);
                if siblings.len() <= 1 {
                    // No series to speak of: degrade to a plain update.
                    let mut updated = anchor.clone();
                    patch.apply_to(&mut updated);
                    self.store.update(updated).await?;
                } else {
                    let day_shift = patch
                        .date
                        .map(|target| target.signed_duration_since(anchor.date).num_days());
                    let updates: Vec<Event> = siblings
                        .into_iter()
                        .map(|mut sibling| {
                            let original_date = sibling.date;
                            patch.apply_to(&mut sibling);
                            sibling.date = match day_shift {
                                Some(days) => original_date + Duration::days(days),
                                None => original_date,
                            };
                            sibling
                        })
                        .collect();
                    self.store.update_batch(updates).await?;
                }
            }
        }

        self.refresh().await
    }

    /// Delete one occurrence or every sibling of its series.
    pub async fn delete(&mut self, id: Uuid, scope: EditScope) -> PlanResult<()> {
        let anchor = self.find(id)?.clone();

        match scope {
            EditScope::Single => self.store.delete(id).await?,
            EditScope::Series => {
                let siblings = self.siblings_of(&anchor);
                if siblings.len() <= 1 {
                    self.store.delete(id).await?;
                } else {
                    let ids = siblings.into_iter().map(|e| e.id).collect();
                    self.store.delete_batch(ids).await?;
                }
            }
        }

        self.refresh().await
    }

    fn find(&self, id: Uuid) -> PlanResult<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(PlanError::NotFound(id))
    }

    /// Every record sharing the event's series identity, the event included.
    ///
    /// Events without a series id have no siblings beyond themselves.
    fn siblings_of(&self, event: &Event) -> Vec<Event> {
        match event.series_id {
            Some(series_id) => self
                .events
                .iter()
                .filter(|e| e.series_id == Some(series_id))
                .cloned()
                .collect(),
            None => vec![event.clone()],
        }
    }
}
