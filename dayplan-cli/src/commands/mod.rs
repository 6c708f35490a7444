pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod move_event;
pub mod month;
pub mod week;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;

use dayplan_core::{Event, EventRepository};

use crate::client::HttpEventStore;

/// `--scope` flag for operations on repeating events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Apply to this occurrence only
    Single,
    /// Apply to the entire series
    Series,
}

/// Connect to the server and load the current event collection.
pub async fn load_repo(server: Option<String>) -> Result<EventRepository<HttpEventStore>> {
    let store = match server {
        Some(url) => HttpEventStore::new(url),
        None => HttpEventStore::from_env(),
    };
    let mut repo = EventRepository::new(store);
    repo.refresh()
        .await
        .context("Could not load events. Is dayplan-server running?")?;
    Ok(repo)
}

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{s}'. Expected YYYY-MM-DD"))
}

/// Parse an `HH:MM` argument.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid time '{s}'. Expected HH:MM"))
}

/// Find an event by full id or unambiguous id prefix.
pub fn resolve_event<'a>(events: &'a [Event], id_prefix: &str) -> Result<&'a Event> {
    let matches: Vec<&Event> = events
        .iter()
        .filter(|e| e.id.to_string().starts_with(id_prefix))
        .collect();

    match matches.len() {
        0 => anyhow::bail!("No event matches id '{id_prefix}'"),
        1 => Ok(matches[0]),
        n => anyhow::bail!("Id '{id_prefix}' is ambiguous ({n} matches). Use more characters."),
    }
}
