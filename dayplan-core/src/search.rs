//! Search and view filtering over the event collection.

use chrono::NaiveDate;

use crate::event::Event;

/// Whether an event matches a search term.
///
/// Case-insensitive substring match against title, description and
/// location. An empty term matches everything.
pub fn matches_term(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
        || event.location.to_lowercase().contains(&needle)
}

/// Filter events by search term and optional date range (both inclusive).
pub fn filter_events<'a>(
    events: &'a [Event],
    term: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| matches_term(e, term))
        .filter(|e| from.is_none_or(|from| e.date >= from))
        .filter(|e| to.is_none_or(|to| e.date <= to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, EventDraft, RepeatRule};
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn event(title: &str, description: &str, location: &str, date: NaiveDate) -> Event {
        EventDraft {
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            date,
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            category: Category::Other,
            repeat: RepeatRule::none(),
            notification_minutes: 0,
            series_id: None,
        }
        .into_event(Uuid::new_v4())
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn term_matches_title_only_events() {
        let events = vec![
            event("팀 회의", "", "", d(2025, 3, 20)),
            event("점심 약속", "", "", d(2025, 3, 20)),
        ];

        let hits = filter_events(&events, "회의", None, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "팀 회의");
    }

    #[test]
    fn empty_term_restores_everything() {
        let events = vec![
            event("팀 회의", "", "", d(2025, 3, 20)),
            event("점심 약속", "", "", d(2025, 3, 20)),
        ];

        assert_eq!(filter_events(&events, "", None, None).len(), 2);
    }

    #[test]
    fn term_matches_description_and_location() {
        let events = vec![
            event("Standup", "weekly sync", "", d(2025, 3, 20)),
            event("Lunch", "", "Main Street Cafe", d(2025, 3, 20)),
            event("Review", "", "", d(2025, 3, 20)),
        ];

        assert_eq!(filter_events(&events, "sync", None, None).len(), 1);
        assert_eq!(filter_events(&events, "cafe", None, None).len(), 1);
    }

    #[test]
    fn term_is_case_insensitive() {
        let events = vec![event("Team Meeting", "", "", d(2025, 3, 20))];
        assert_eq!(filter_events(&events, "meeting", None, None).len(), 1);
        assert_eq!(filter_events(&events, "TEAM", None, None).len(), 1);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let events = vec![
            event("before", "", "", d(2025, 3, 19)),
            event("first", "", "", d(2025, 3, 20)),
            event("last", "", "", d(2025, 3, 26)),
            event("after", "", "", d(2025, 3, 27)),
        ];

        let hits = filter_events(&events, "", Some(d(2025, 3, 20)), Some(d(2025, 3, 26)));
        let titles: Vec<&str> = hits.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "last"]);
    }
}
