//! Create an event (or a whole recurring series).

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use dayplan_core::overlap::find_overlapping;
use dayplan_core::{Category, EventDraft, EventRepository, RepeatKind, RepeatRule};

use crate::client::HttpEventStore;
use crate::commands::{parse_date, parse_time};
use crate::confirm;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    mut repo: EventRepository<HttpEventStore>,
    title: String,
    date: Option<String>,
    start: String,
    end: String,
    description: Option<String>,
    location: Option<String>,
    category: Option<Category>,
    repeat: Option<RepeatKind>,
    every: u32,
    until: Option<String>,
    notify: i64,
) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(&s)?,
        None => Local::now().date_naive(),
    };
    let start_time = parse_time(&start)?;
    let end_time = parse_time(&end)?;

    let repeat = match repeat {
        Some(kind) if kind != RepeatKind::None => {
            let end_date = until.as_deref().map(parse_date).transpose()?;
            RepeatRule::new(kind, every, end_date)
        }
        _ => RepeatRule::none(),
    };

    let draft = EventDraft {
        title,
        description: description.unwrap_or_default(),
        location: location.unwrap_or_default(),
        date,
        start_time,
        end_time,
        category: category.unwrap_or_default(),
        repeat,
        notification_minutes: notify,
        series_id: None,
    };
    draft.validate()?;

    let conflicts = find_overlapping(repo.events(), date, start_time, end_time, None);
    if !conflicts.is_empty() && !confirm::overlap_proceed(&conflicts)? {
        println!("Cancelled.");
        return Ok(());
    }

    let created = repo.create(draft).await?;

    if created.len() == 1 {
        println!("{}", format!("Created: {}", created[0].title).green());
    } else {
        let last = created.last().map(|e| e.date).unwrap_or(date);
        println!(
            "{}",
            format!(
                "Created: {} ({} occurrences through {})",
                created[0].title,
                created.len(),
                last
            )
            .green()
        );
    }
    Ok(())
}
