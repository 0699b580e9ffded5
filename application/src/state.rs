//! Client state service
//!
//! Read-through access to the persisted theme preference and bounded
//! query history. Stored data is never trusted: malformed or absent
//! values decode to defaults instead of erroring.

use crate::ports::state_store::{StateStore, StoreError};
use council_domain::{HistoryEntry, QueryHistory, Theme};
use std::sync::Arc;
use tracing::warn;

/// Store key for the theme preference
pub const THEME_KEY: &str = "theme";
/// Store key for the query history list
pub const HISTORY_KEY: &str = "queryHistory";

/// History and theme persistence over a [`StateStore`]
#[derive(Clone)]
pub struct ClientState {
    store: Arc<dyn StateStore>,
}

impl ClientState {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Load the query history; malformed stored data reads as empty
    pub fn history(&self) -> QueryHistory {
        let Some(raw) = self.store.get(HISTORY_KEY) else {
            return QueryHistory::default();
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => QueryHistory::new(entries),
            Err(e) => {
                warn!("Discarding malformed query history: {}", e);
                QueryHistory::default()
            }
        }
    }

    /// Record a submitted query, evicting beyond the history bound.
    ///
    /// A store failure is logged and swallowed: history is a convenience
    /// and must never block a run.
    pub fn record_query(&self, query: &str) {
        let mut history = self.history();
        history.record(HistoryEntry::now(query));

        if let Err(e) = self.persist_history(&history) {
            warn!("Could not persist query history: {}", e);
        }
    }

    fn persist_history(&self, history: &QueryHistory) -> Result<(), StoreError> {
        let raw = serde_json::to_string(history.entries())?;
        self.store.set(HISTORY_KEY, &raw)
    }

    /// Load the theme preference, defaulting to light
    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .map(|raw| Theme::from_stored(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
