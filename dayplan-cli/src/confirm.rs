//! Interactive confirmation prompts.

use anyhow::Result;
use dialoguer::{Confirm, Select};
use owo_colors::OwoColorize;

use dayplan_core::Event;

/// Outcome of the series-scope question for a repeating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDecision {
    Single,
    Series,
    Cancel,
}

/// Show the conflicting events and ask whether to proceed anyway.
pub fn overlap_proceed(conflicts: &[&Event]) -> Result<bool> {
    println!("{}", "Schedule conflict:".yellow().bold());
    for event in conflicts {
        println!(
            "  {} {}-{} {}",
            event.date,
            event.start_time.format("%H:%M"),
            event.end_time.format("%H:%M"),
            event.title
        );
    }

    Ok(Confirm::new()
        .with_prompt("Continue anyway?")
        .default(false)
        .interact()?)
}

/// Ask whether an operation on a repeating event applies to one occurrence
/// or the whole series.
pub fn series_scope(action: &str, event: &Event) -> Result<ScopeDecision> {
    println!(
        "'{}' is a repeating event.",
        event.title.bold()
    );

    let items = [
        format!("{action} this occurrence only"),
        format!("{action} the entire series"),
        "Cancel".to_string(),
    ];
    let selection = Select::new()
        .with_prompt("  Apply to")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ScopeDecision::Single,
        1 => ScopeDecision::Series,
        _ => ScopeDecision::Cancel,
    })
}
