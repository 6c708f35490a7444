//! Agenda listing with search and date-range filtering.

use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::{Event, EventRepository};
use dayplan_core::search::filter_events;

use crate::client::HttpEventStore;
use crate::commands::parse_date;
use crate::render;

pub async fn run(
    repo: EventRepository<HttpEventStore>,
    search: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let from = from.as_deref().map(parse_date).transpose()?;
    let to = to.as_deref().map(parse_date).transpose()?;
    let term = search.unwrap_or_default();

    let mut events: Vec<&Event> = filter_events(repo.events(), &term, from, to);
    events.sort_by_key(|e| (e.date, e.start_time));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    println!("{}", render::agenda(&events));
    Ok(())
}
