//! Terminal rendering for agenda, week and month views.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use dayplan_core::Event;
use dayplan_core::date_util::{events_for_day, format_date, month_weeks, week_dates};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const DAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// One agenda line for an event, prefixed with a short id usable as an
/// edit/move/delete target.
pub fn event_line(event: &Event) -> String {
    let short_id: String = event.id.to_string().chars().take(8).collect();
    let time = format!(
        "{}-{}",
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M")
    );
    let mut line = format!("  {} {} {}", short_id.dimmed(), time, event.title);
    line.push_str(&format!(" {}", format!("[{}]", event.category).dimmed()));
    if event.series_id.is_some() {
        line.push_str(&format!(" {}", "(repeats)".dimmed()));
    }
    if event.notification_minutes > 0 {
        line.push_str(&format!(
            " {}",
            format!("(notify {}m)", event.notification_minutes).dimmed()
        ));
    }
    line
}

/// Group sorted events by date with bold date headers.
pub fn agenda(events: &[&Event]) -> String {
    let mut lines = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            let label = format!("{} ({})", format_date(event.date, None), event.date.weekday());
            lines.push(label.bold().to_string());
            current_date = Some(event.date);
        }
        lines.push(event_line(event));
    }

    lines.join("\n")
}

/// Seven-day view of the Sunday-started week containing `date`.
pub fn week(date: NaiveDate, events: &[Event]) -> String {
    let mut lines = Vec::new();

    for day in week_dates(date) {
        let label = format!("{} {}", day.weekday(), format_date(day, None));
        lines.push(label.bold().to_string());

        let mut todays: Vec<&Event> = events.iter().filter(|e| e.date == day).collect();
        todays.sort_by_key(|e| e.start_time);
        if todays.is_empty() {
            lines.push(format!("  {}", "-".dimmed()));
        } else {
            for event in todays {
                lines.push(event_line(event));
            }
        }
    }

    lines.join("\n")
}

/// Month grid with event days highlighted, followed by the month's agenda.
pub fn month(date: NaiveDate, events: &[Event]) -> String {
    let mut lines = Vec::new();

    let title = format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year());
    lines.push(title.bold().to_string());
    lines.push(DAY_HEADER.to_string());

    let in_month: Vec<Event> = events
        .iter()
        .filter(|e| e.date.year() == date.year() && e.date.month() == date.month())
        .cloned()
        .collect();

    for week_row in month_weeks(date) {
        let mut row = String::new();
        for cell in week_row {
            match cell {
                Some(day) => {
                    let has_events = !events_for_day(&in_month, day).is_empty();
                    let text = format!("{day:>3} ");
                    if has_events {
                        row.push_str(&text.green().bold().to_string());
                    } else {
                        row.push_str(&text);
                    }
                }
                None => row.push_str("    "),
            }
        }
        lines.push(row.trim_end().to_string());
    }

    let mut sorted: Vec<&Event> = in_month.iter().collect();
    sorted.sort_by_key(|e| (e.date, e.start_time));
    if !sorted.is_empty() {
        lines.push(String::new());
        lines.push(agenda(&sorted));
    }

    lines.join("\n")
}
