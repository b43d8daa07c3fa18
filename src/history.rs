//! Scan history: append-only, most-recent-first, session-scoped.

use crate::record::MedicineRecord;
use chrono::{DateTime, Utc};

/// One completed resolution, local or remote.
#[derive(Debug, Clone)]
pub struct ScanHistoryItem {
    pub record: MedicineRecord,
    pub inserted_at: DateTime<Utc>,
}

/// The session's scan history.
///
/// Entries are only ever appended; the library never prunes. Iteration is
/// most-recent-first, matching how the history panel renders.
#[derive(Debug, Default)]
pub struct ScanHistory {
    items: Vec<ScanHistoryItem>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed resolution.
    pub fn push(&mut self, record: MedicineRecord) {
        self.items.push(ScanHistoryItem {
            record,
            inserted_at: Utc::now(),
        });
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &ScanHistoryItem> {
        self.items.iter().rev()
    }

    /// The most recently inserted entry, if any.
    pub fn latest(&self) -> Option<&ScanHistoryItem> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
