//! In-memory `EventStore` for tests and offline use.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};
use crate::event::{Event, EventDraft};
use crate::store::EventStore;

/// Stores events in a `Vec` behind a mutex.
///
/// `fail_next_call` lets tests exercise failure paths: the next store
/// operation returns an error instead of touching the collection.
#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
    fail_next: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed the store with existing records.
    pub fn with_events(events: Vec<Event>) -> Self {
        MemoryStore {
            events: Mutex::new(events),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next operation fail with a store error.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> PlanResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(PlanError::Store("injected failure".into()));
        }
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        self.events.lock().expect("event store lock poisoned")
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list(&self) -> PlanResult<Vec<Event>> {
        self.check_failure()?;
        Ok(self.lock().clone())
    }

    async fn create(&self, draft: EventDraft) -> PlanResult<Event> {
        self.check_failure()?;
        let event = draft.into_event(Uuid::new_v4());
        self.lock().push(event.clone());
        Ok(event)
    }

    async fn create_batch(&self, drafts: Vec<EventDraft>) -> PlanResult<Vec<Event>> {
        self.check_failure()?;
        let created: Vec<Event> = drafts
            .into_iter()
            .map(|draft| draft.into_event(Uuid::new_v4()))
            .collect();
        self.lock().extend(created.iter().cloned());
        Ok(created)
    }

    async fn update(&self, event: Event) -> PlanResult<Event> {
        self.check_failure()?;
        let mut events = self.lock();
        let slot = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or(PlanError::NotFound(event.id))?;
        *slot = event.clone();
        Ok(event)
    }

    async fn update_batch(&self, updates: Vec<Event>) -> PlanResult<Vec<Event>> {
        self.check_failure()?;
        let mut events = self.lock();
        // All-or-nothing: verify every id before touching anything.
        for update in &updates {
            if !events.iter().any(|e| e.id == update.id) {
                return Err(PlanError::NotFound(update.id));
            }
        }
        for update in &updates {
            if let Some(slot) = events.iter_mut().find(|e| e.id == update.id) {
                *slot = update.clone();
            }
        }
        Ok(updates)
    }

    async fn delete(&self, id: Uuid) -> PlanResult<()> {
        self.check_failure()?;
        let mut events = self.lock();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(PlanError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_batch(&self, ids: Vec<Uuid>) -> PlanResult<()> {
        self.check_failure()?;
        let mut events = self.lock();
        for id in &ids {
            if !events.iter().any(|e| e.id == *id) {
                return Err(PlanError::NotFound(*id));
            }
        }
        events.retain(|e| !ids.contains(&e.id));
        Ok(())
    }
}
