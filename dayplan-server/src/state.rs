//! Shared application state.

use std::sync::Arc;

use anyhow::Result;
use dayplan_core::Event;
use tokio::sync::RwLock;

use crate::db::Db;

/// The event collection, held in memory and persisted through [`Db`].
///
/// Mutations clone the collection, apply the change, persist, and only then
/// swap the in-memory view, so a failed write never leaves memory and disk
/// disagreeing.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Db>,
    events: Arc<RwLock<Vec<Event>>>,
}

impl AppState {
    pub fn new(db: Db) -> Result<Self> {
        let events = db.load()?;
        Ok(AppState {
            db: Arc::new(db),
            events: Arc::new(RwLock::new(events)),
        })
    }

    pub async fn events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    /// Apply `mutate` to a working copy, persist it, then publish it.
    ///
    /// The error type is generic so route handlers can fail with their own
    /// error (e.g. a 404) without committing anything.
    pub async fn commit<F, T, E>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<Event>) -> Result<T, E>,
        E: From<anyhow::Error>,
    {
        let mut guard = self.events.write().await;
        let mut next = guard.clone();
        let output = mutate(&mut next)?;
        self.db.save(&next).map_err(E::from)?;
        *guard = next;
        Ok(output)
    }
}
