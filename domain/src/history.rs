//! Bounded query history

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the history list
pub const HISTORY_LIMIT: usize = 10;

/// One submitted query, recorded at submission time (Value Object)
///
/// Recorded even if the run later fails; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    /// RFC 3339 timestamp of the submission
    pub timestamp: String,
}

impl HistoryEntry {
    /// Create an entry timestamped now
    pub fn now(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// Newest-first list of submitted queries, bounded at [`HISTORY_LIMIT`]
///
/// Insertion is unconditional; duplicates are allowed. Once the bound is
/// exceeded the oldest entries are evicted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryHistory {
    entries: Vec<HistoryEntry>,
}

impl QueryHistory {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        let mut history = Self { entries };
        history.entries.truncate(HISTORY_LIMIT);
        history
    }

    /// Prepend an entry, evicting the oldest beyond the bound
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
