//! Backend contract for event persistence.
//!
//! The repository talks to whatever implements `EventStore`: the CLI plugs
//! in an HTTP client against the dayplan server, tests plug in
//! [`MemoryStore`].

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PlanResult;
use crate::event::{Event, EventDraft};

/// Persistence operations the backend must provide.
///
/// Batch operations are single logical operations: implementations apply
/// them all-or-nothing, so a failure means no partial success to reason
/// about.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// The full current collection.
    async fn list(&self) -> PlanResult<Vec<Event>>;

    /// Persist one event; the backend assigns the id.
    async fn create(&self, draft: EventDraft) -> PlanResult<Event>;

    /// Persist many events in one logical operation.
    async fn create_batch(&self, drafts: Vec<EventDraft>) -> PlanResult<Vec<Event>>;

    /// Replace the stored record with the same id.
    async fn update(&self, event: Event) -> PlanResult<Event>;

    /// Replace many stored records in one logical operation.
    async fn update_batch(&self, events: Vec<Event>) -> PlanResult<Vec<Event>>;

    /// Remove one record by id.
    async fn delete(&self, id: Uuid) -> PlanResult<()>;

    /// Remove many records in one logical operation.
    async fn delete_batch(&self, ids: Vec<Uuid>) -> PlanResult<()>;
}
