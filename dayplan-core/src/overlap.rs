//! Overlap detection between event time ranges.
//!
//! Time ranges are half-open `[start, end)`: back-to-back events
//! (10:00-11:00 and 11:00-12:00) do not overlap.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::event::Event;

/// Whether two same-day time ranges intersect.
pub fn ranges_overlap(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Existing events that conflict with a candidate occurrence.
///
/// Pure scan: same date, intersecting time range, excluding the candidate's
/// own id when it already exists (edits must not conflict with themselves).
/// Overlap never blocks an operation by itself; callers surface the result
/// as a proceed/cancel decision.
pub fn find_overlapping<'a>(
    events: &'a [Event],
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    exclude: Option<Uuid>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| Some(e.id) != exclude)
        .filter(|e| e.date == date)
        .filter(|e| ranges_overlap(e.start_time, e.end_time, start, end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, EventDraft, RepeatRule};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event_on(date: NaiveDate, start: NaiveTime, end: NaiveTime, title: &str) -> Event {
        EventDraft {
            title: title.to_string(),
            description: String::new(),
            location: String::new(),
            date,
            start_time: start,
            end_time: end,
            category: Category::Other,
            repeat: RepeatRule::none(),
            notification_minutes: 0,
            series_id: None,
        }
        .into_event(Uuid::new_v4())
    }

    #[test]
    fn partial_overlap_detected() {
        assert!(ranges_overlap(t(14, 0), t(15, 0), t(14, 30), t(15, 30)));
        assert!(ranges_overlap(t(14, 30), t(15, 30), t(14, 0), t(15, 0)));
    }

    #[test]
    fn containment_is_overlap() {
        assert!(ranges_overlap(t(9, 0), t(17, 0), t(12, 0), t(13, 0)));
        assert!(ranges_overlap(t(12, 0), t(13, 0), t(9, 0), t(17, 0)));
    }

    #[test]
    fn back_to_back_is_not_overlap() {
        assert!(!ranges_overlap(t(10, 0), t(11, 0), t(11, 0), t(12, 0)));
        assert!(!ranges_overlap(t(11, 0), t(12, 0), t(10, 0), t(11, 0)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(t(8, 0), t(9, 0), t(13, 0), t(14, 0)));
    }

    #[test]
    fn symmetry_on_sample_grid() {
        let times = [t(9, 0), t(10, 0), t(11, 0), t(12, 0)];
        for &s1 in &times {
            for &e1 in &times {
                for &s2 in &times {
                    for &e2 in &times {
                        if s1 < e1 && s2 < e2 {
                            assert_eq!(
                                ranges_overlap(s1, e1, s2, e2),
                                ranges_overlap(s2, e2, s1, e1)
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn find_overlapping_filters_by_date_and_time() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let other_day = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
        let events = vec![
            event_on(day, t(14, 0), t(15, 0), "original"),
            event_on(day, t(16, 0), t(17, 0), "later"),
            event_on(other_day, t(14, 0), t(15, 0), "tomorrow"),
        ];

        let conflicts = find_overlapping(&events, day, t(14, 30), t(15, 30), None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].title, "original");
    }

    #[test]
    fn find_overlapping_excludes_own_id() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let existing = event_on(day, t(14, 0), t(15, 0), "editing me");
        let id = existing.id;
        let events = vec![existing];

        // The event being edited never conflicts with itself.
        let conflicts = find_overlapping(&events, day, t(14, 0), t(15, 0), Some(id));
        assert!(conflicts.is_empty());

        let conflicts = find_overlapping(&events, day, t(14, 0), t(15, 0), None);
        assert_eq!(conflicts.len(), 1);
    }
}
