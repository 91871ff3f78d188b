//! Recent-activity list shown on the home screen.
use serde::{Deserialize, Serialize};

use crate::session::ActivitySummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub summary: String,
    pub tag: String,
}

impl From<&ActivitySummary> for ActivityEntry {
    fn from(summary: &ActivitySummary) -> Self {
        Self {
            title: summary.title.clone(),
            summary: summary.summary_line(),
            tag: summary.tag.clone(),
        }
    }
}

/// Newest-first list of activity entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHistory {
    entries: Vec<ActivityEntry>,
}

impl ActivityHistory {
    #[must_use]
    pub const fn from_entries(entries: Vec<ActivityEntry>) -> Self {
        Self { entries }
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        self.entries.insert(0, entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
