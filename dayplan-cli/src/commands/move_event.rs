//! Reschedule an event by "dragging" it onto another date.
//!
//! Drives the same reconciler the calendar UI uses: plain events move
//! immediately, recurring occurrences ask whether the move applies to one
//! occurrence or the whole series.

use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::dnd::{DragReconciler, DropOutcome, SeriesChoice};
use dayplan_core::EventRepository;

use crate::client::HttpEventStore;
use crate::commands::{ScopeArg, parse_date, resolve_event};
use crate::confirm::{self, ScopeDecision};

pub async fn run(
    mut repo: EventRepository<HttpEventStore>,
    id_prefix: String,
    target: String,
    scope: Option<ScopeArg>,
) -> Result<()> {
    let target = parse_date(&target)?;
    let event = resolve_event(repo.events(), &id_prefix)?.clone();
    let title = event.title.clone();

    let mut dnd = DragReconciler::new();
    dnd.drag_start(event.clone());

    match dnd.drop_on(&mut repo, target).await? {
        DropOutcome::Moved => {
            println!("{}", format!("Moved '{title}' to {target}").green());
        }
        DropOutcome::NoChange => {
            println!("'{title}' is already on {target}.");
        }
        DropOutcome::AwaitingDecision => {
            let choice = match scope {
                Some(ScopeArg::Single) => SeriesChoice::SingleOnly,
                Some(ScopeArg::Series) => SeriesChoice::WholeSeries,
                None => match confirm::series_scope("Move", &event)? {
                    ScopeDecision::Single => SeriesChoice::SingleOnly,
                    ScopeDecision::Series => SeriesChoice::WholeSeries,
                    ScopeDecision::Cancel => SeriesChoice::Cancel,
                },
            };

            match dnd.resolve(&mut repo, choice).await? {
                DropOutcome::Moved => {
                    println!("{}", format!("Moved '{title}' to {target}").green());
                }
                _ => println!("Cancelled."),
            }
        }
    }

    Ok(())
}
