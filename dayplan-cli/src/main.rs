mod client;
mod commands;
mod confirm;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dayplan_core::{Category, RepeatKind};

use crate::client::HttpEventStore;
use crate::commands::ScopeArg;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Manage your personal calendar from the terminal")]
struct Cli {
    /// Server URL (defaults to $DAYPLAN_SERVER or http://127.0.0.1:4310)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event (use --repeat to create a whole series)
    Add {
        title: String,

        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// work, personal, family or other
        #[arg(short, long)]
        category: Option<Category>,

        /// daily, weekly, monthly or yearly
        #[arg(short, long)]
        repeat: Option<RepeatKind>,

        /// Repeat every N days/weeks/months/years
        #[arg(long, default_value_t = 1)]
        every: u32,

        /// Last date the repeat may fall on (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        /// Notify N minutes before the start time (0 = off)
        #[arg(short, long, default_value_t = 0)]
        notify: i64,
    },
    /// List events as an agenda
    List {
        /// Only events whose title/description/location contains this
        #[arg(short, long)]
        search: Option<String>,

        /// From date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// To date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Search events by title, description or location
    Search { term: String },
    /// Show the week containing a date
    Week {
        /// Any date inside the week (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the month containing a date
    Month {
        /// Any date inside the month (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit an event's fields
    Edit {
        /// Event id (or unambiguous prefix, as shown by `list`)
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long)]
        notify: Option<i64>,

        /// For repeating events: single or series (prompted when omitted)
        #[arg(long)]
        scope: Option<ScopeArg>,
    },
    /// Delete an event
    Delete {
        /// Event id (or unambiguous prefix)
        id: String,

        /// For repeating events: single or series (prompted when omitted)
        #[arg(long)]
        scope: Option<ScopeArg>,
    },
    /// Move an event to another date (drag-and-drop from the terminal)
    Move {
        /// Event id (or unambiguous prefix)
        id: String,

        /// Target date (YYYY-MM-DD)
        date: String,

        /// For repeating events: single or series (prompted when omitted)
        #[arg(long)]
        scope: Option<ScopeArg>,
    },
    /// Clear every event (test environments only)
    #[command(hide = true)]
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let server = cli.server;

    match cli.command {
        Commands::Add {
            title,
            date,
            start,
            end,
            description,
            location,
            category,
            repeat,
            every,
            until,
            notify,
        } => {
            let repo = commands::load_repo(server).await?;
            commands::add::run(
                repo,
                title,
                date,
                start,
                end,
                description,
                location,
                category,
                repeat,
                every,
                until,
                notify,
            )
            .await
        }
        Commands::List { search, from, to } => {
            let repo = commands::load_repo(server).await?;
            commands::list::run(repo, search, from, to).await
        }
        Commands::Search { term } => {
            let repo = commands::load_repo(server).await?;
            commands::list::run(repo, Some(term), None, None).await
        }
        Commands::Week { date } => {
            let repo = commands::load_repo(server).await?;
            commands::week::run(repo, date).await
        }
        Commands::Month { date } => {
            let repo = commands::load_repo(server).await?;
            commands::month::run(repo, date).await
        }
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            description,
            location,
            category,
            notify,
            scope,
        } => {
            let repo = commands::load_repo(server).await?;
            commands::edit::run(
                repo, id, title, date, start, end, description, location, category, notify, scope,
            )
            .await
        }
        Commands::Delete { id, scope } => {
            let repo = commands::load_repo(server).await?;
            commands::delete::run(repo, id, scope).await
        }
        Commands::Move { id, date, scope } => {
            let repo = commands::load_repo(server).await?;
            commands::move_event::run(repo, id, date, scope).await
        }
        Commands::Reset => {
            let store = match server {
                Some(url) => HttpEventStore::new(url),
                None => HttpEventStore::from_env(),
            };
            store.reset().await?;
            println!("All events cleared.");
            Ok(())
        }
    }
}
