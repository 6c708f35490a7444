//! Week view.

use anyhow::Result;
use chrono::Local;

use dayplan_core::EventRepository;

use crate::client::HttpEventStore;
use crate::commands::parse_date;
use crate::render;

pub async fn run(repo: EventRepository<HttpEventStore>, date: Option<String>) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(&s)?,
        None => Local::now().date_naive(),
    };

    println!("{}", render::week(date, repo.events()));
    Ok(())
}
