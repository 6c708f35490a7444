//! Lead-time notifications.
//!
//! `NotificationTrigger` is polled on a timer with the current wall-clock
//! time and the current event collection; it owns the set of already
//! notified ids so each event fires at most once. Rendering and dismissal
//! belong to the display layer.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use crate::event::Event;

/// One notification to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub event_id: Uuid,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct NotificationTrigger {
    notified: HashSet<Uuid>,
}

impl NotificationTrigger {
    pub fn new() -> Self {
        NotificationTrigger::default()
    }

    /// Collect the notifications due at `now`.
    ///
    /// An event qualifies when its start is still ahead and within the
    /// configured lead time. Each id fires exactly once for the lifetime
    /// of the trigger; events that already started never fire.
    pub fn poll(&mut self, now: NaiveDateTime, events: &[Event]) -> Vec<Notice> {
        let mut due = Vec::new();

        for event in events {
            if event.notification_minutes <= 0 || self.notified.contains(&event.id) {
                continue;
            }

            let time_left = event.start_datetime() - now;
            if time_left >= Duration::zero()
                && time_left <= Duration::minutes(event.notification_minutes)
            {
                self.notified.insert(event.id);
                due.push(Notice {
                    event_id: event.id,
                    message: format!(
                        "'{}' starts in {} minute(s)",
                        event.title, event.notification_minutes
                    ),
                });
            }
        }

        due
    }

    /// Forget an id so a rescheduled event can notify again.
    pub fn clear(&mut self, event_id: Uuid) {
        self.notified.remove(&event_id);
    }
}
