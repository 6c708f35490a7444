//! Core types and logic for the dayplan ecosystem.
//!
//! This crate holds everything the binaries share:
//! - `Event` and related types, with form validation
//! - date helpers for week/month views
//! - recurrence expansion and overlap detection
//! - the client-side event repository over a pluggable backend
//! - the drag-and-drop reconciler and the notification trigger

pub mod date_util;
pub mod dnd;
pub mod error;
pub mod event;
pub mod notify;
pub mod overlap;
pub mod recurrence;
pub mod repository;
pub mod search;
pub mod store;

// Re-export the central types at crate root for convenience
pub use error::{PlanError, PlanResult};
pub use event::{Category, Event, EventDraft, EventPatch, RepeatKind, RepeatRule};
pub use repository::{EditScope, EventRepository};
pub use store::{EventStore, MemoryStore};
