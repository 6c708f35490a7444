//! Edit an event's fields, resolving single-vs-series scope.

use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::overlap::find_overlapping;
use dayplan_core::{Category, EditScope, EventPatch, EventRepository};

use crate::client::HttpEventStore;
use crate::commands::{ScopeArg, parse_date, parse_time, resolve_event};
use crate::confirm::{self, ScopeDecision};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    mut repo: EventRepository<HttpEventStore>,
    id_prefix: String,
    title: Option<String>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    location: Option<String>,
    category: Option<Category>,
    notify: Option<i64>,
    scope: Option<ScopeArg>,
) -> Result<()> {
    let event = resolve_event(repo.events(), &id_prefix)?.clone();

    let patch = EventPatch {
        title,
        description,
        location,
        date: date.as_deref().map(parse_date).transpose()?,
        start_time: start.as_deref().map(parse_time).transpose()?,
        end_time: end.as_deref().map(parse_time).transpose()?,
        category,
        notification_minutes: notify,
    };
    if patch.is_empty() {
        anyhow::bail!("Nothing to change. Pass at least one field flag (see --help).");
    }

    let scope = match resolve_scope(&event, scope, "Edit")? {
        Some(scope) => scope,
        None => {
            println!("Cancelled.");
            return Ok(());
        }
    };

    // Overlap check against the patched date/times, never against itself.
    let mut patched = event.clone();
    patch.apply_to(&mut patched);
    if patched.start_time >= patched.end_time {
        anyhow::bail!("start time must be before end time");
    }
    let conflicts = find_overlapping(
        repo.events(),
        patched.date,
        patched.start_time,
        patched.end_time,
        Some(event.id),
    );
    if !conflicts.is_empty() && !confirm::overlap_proceed(&conflicts)? {
        println!("Cancelled.");
        return Ok(());
    }

    repo.update(event.id, patch, scope).await?;
    println!("{}", format!("Updated: {}", patched.title).green());
    Ok(())
}

/// Turn an explicit `--scope` flag or an interactive prompt into an
/// `EditScope`. `None` means the user cancelled.
pub fn resolve_scope(
    event: &dayplan_core::Event,
    flag: Option<ScopeArg>,
    action: &str,
) -> Result<Option<EditScope>> {
    if !event.is_recurring() && event.series_id.is_none() {
        return Ok(Some(EditScope::Single));
    }

    if let Some(flag) = flag {
        return Ok(Some(match flag {
            ScopeArg::Single => EditScope::Single,
            ScopeArg::Series => EditScope::Series,
        }));
    }

    Ok(match confirm::series_scope(action, event)? {
        ScopeDecision::Single => Some(EditScope::Single),
        ScopeDecision::Series => Some(EditScope::Series),
        ScopeDecision::Cancel => None,
    })
}
