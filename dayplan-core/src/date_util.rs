//! Pure date helpers for calendar views.
//!
//! Everything here works on plain `NaiveDate`s; the canonical string form
//! `YYYY-MM-DD` is the grouping key used throughout the UI layers.

use chrono::{Datelike, Duration, NaiveDate};

use crate::event::Event;

/// Format a date as the canonical `YYYY-MM-DD` key.
///
/// `day_override` substitutes the day-of-month while keeping year and month,
/// which is how month-grid cells derive their key from the rendered month.
pub fn format_date(date: NaiveDate, day_override: Option<u32>) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        day_override.unwrap_or(date.day())
    )
}

/// The seven consecutive dates of the Sunday-started week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let sunday = date - Duration::days(offset);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// The calendar-month grid for the month containing `date`.
///
/// Each row is one week of 7 cells; cells outside the month are `None` so
/// every row is full width.
pub fn month_weeks(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = date.with_day(1).expect("day 1 exists in every month");
    let lead = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(date.year(), date.month()) as usize;

    let mut cells: Vec<Option<u32>> = vec![None; lead];
    cells.extend((1..=days as u32).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells
        .chunks(7)
        .map(|week| std::array::from_fn(|i| week[i]))
        .collect()
}

/// Events whose date falls on `day` of the month being rendered.
pub fn events_for_day(events: &[Event], day: u32) -> Vec<&Event> {
    events.iter().filter(|e| e.date.day() == day).collect()
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("first of month has a predecessor")
        .day()
}
