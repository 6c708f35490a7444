//! Polls dayplan-server and fires a desktop notification when an event's
//! lead time elapses. Each event notifies at most once per process
//! lifetime; events that already started never notify.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use notify_rust::Notification;

use dayplan_core::Event;
use dayplan_core::notify::NotificationTrigger;

#[derive(Parser)]
#[command(name = "dayplan-notify")]
#[command(about = "Desktop notifications for upcoming dayplan events")]
struct Cli {
    /// Server URL
    #[arg(long, default_value = "http://127.0.0.1:4310")]
    server: String,

    /// Poll interval in seconds
    #[arg(long, default_value_t = 1)]
    interval: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let http = reqwest::blocking::Client::new();
    let mut trigger = NotificationTrigger::new();

    println!("dayplan-notify watching {}", cli.server);

    loop {
        match fetch_events(&http, &cli.server) {
            Ok(events) => {
                let now = chrono::Local::now().naive_local();
                for notice in trigger.poll(now, &events) {
                    if let Err(e) = Notification::new()
                        .summary("dayplan")
                        .body(&notice.message)
                        .show()
                    {
                        eprintln!("Failed to show notification: {e}");
                    }
                }
            }
            // Keep polling; the server may just be restarting.
            Err(e) => eprintln!("{e:#}"),
        }

        thread::sleep(Duration::from_secs(cli.interval.max(1)));
    }
}

fn fetch_events(http: &reqwest::blocking::Client, server: &str) -> Result<Vec<Event>> {
    let events = http
        .get(format!("{server}/api/events"))
        .send()
        .and_then(|resp| resp.error_for_status())
        .context("Failed to reach dayplan-server")?
        .json()
        .context("Invalid server response")?;
    Ok(events)
}
