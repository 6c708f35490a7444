//! JSON-file persistence for the event collection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use dayplan_core::Event;

pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: PathBuf) -> Self {
        Db { path }
    }

    /// Read the full collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let events = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(events)
    }

    /// Write the full collection, atomically (tmp file + rename).
    pub fn save(&self, events: &[Event]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(events)?;
        let temp = self.path.with_extension("json.tmp");

        std::fs::write(&temp, content)
            .with_context(|| format!("Failed to write {}", temp.display()))?;
        std::fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
