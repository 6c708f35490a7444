//! Delete an event or a whole series.

use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::{EditScope, EventRepository};

use crate::client::HttpEventStore;
use crate::commands::{ScopeArg, resolve_event};
use crate::commands::edit::resolve_scope;

pub async fn run(
    mut repo: EventRepository<HttpEventStore>,
    id_prefix: String,
    scope: Option<ScopeArg>,
) -> Result<()> {
    let event = resolve_event(repo.events(), &id_prefix)?.clone();

    let scope = match resolve_scope(&event, scope, "Delete")? {
        Some(scope) => scope,
        None => {
            println!("Cancelled.");
            return Ok(());
        }
    };

    let removed_series = scope == EditScope::Series;
    repo.delete(event.id, scope).await?;

    let what = if removed_series {
        format!("Deleted series: {}", event.title)
    } else {
        format!("Deleted: {}", event.title)
    };
    println!("{}", what.red());
    Ok(())
}
