//! The five most recent searches, newest first, persisted under a single storage key.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    models::RecentSearchView,
    store::KeyValueStore,
    util::time_ago::time_ago,
};

pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub query: String,
    /// Unix seconds.
    pub timestamp: i64,
}

pub fn now_timestamp() -> i64 { time::OffsetDateTime::now_utc().unix_timestamp() }

/// `query` moves (or is added) to the front; the list stays unique and capped.
pub fn push_recent(entries: &[RecentSearch], query: &str, timestamp: i64) -> Vec<RecentSearch> {
    std::iter::once(RecentSearch { query: query.to_string(), timestamp })
        .chain(entries.iter().filter(|e| e.query != query).cloned())
        .take(MAX_RECENT_SEARCHES)
        .collect()
}

/// Overwrites the stored list with `entries`.
pub fn save<S: KeyValueStore>(store: &S, entries: &[RecentSearch]) -> Result<()> {
    let json = serde_json::to_string(entries).map_err(|e| Error::storage(RECENT_SEARCHES_KEY, e))?;
    store.set_item(RECENT_SEARCHES_KEY, &json)
}

/// Orders background writes of the list so that the last list handed out wins, whatever
/// order the writes finish in.
#[derive(Debug, Default)]
pub struct SequencedSave {
    issued: AtomicU64,
    /// Ticket of the newest write attempted so far, successful or not.
    settled: Mutex<u64>,
}

impl SequencedSave {
    pub fn new() -> Self { Self::default() }

    /// Take a ticket while the in-memory list is still locked, so tickets follow list order.
    pub fn ticket(&self) -> u64 { self.issued.fetch_add(1, Ordering::SeqCst) + 1 }

    /// Writes `entries` unless a newer ticket already settled. `Ok(false)` means the write
    /// was skipped. A failed write still settles its ticket, so older lists stay skipped.
    pub fn save<S: KeyValueStore>(&self, ticket: u64, store: &S, entries: &[RecentSearch]) -> Result<bool> {
        let mut settled = self.settled.lock().unwrap_or_else(|p| p.into_inner());
        if *settled > ticket {
            debug!(ticket, settled = *settled, "skipping stale recent-search write");
            return Ok(false);
        }
        *settled = ticket;
        save(store, entries).map(|()| true)
    }
}

pub fn views(entries: &[RecentSearch], now: i64) -> Vec<RecentSearchView> {
    entries
        .iter()
        .map(|e| RecentSearchView {
            query: e.query.clone(),
            timestamp: e.timestamp,
            label: time_ago(e.timestamp, now).to_string(),
        })
        .collect()
}

/// In-memory list for the current session, backed by a store. Memory is authoritative: a
/// failed write is logged and the list keeps its new value.
pub struct RecentSearches<S> {
    store: S,
    entries: Vec<RecentSearch>,
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn load(store: S) -> Self {
        let entries = match store.get_item(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<RecentSearch>>(&raw) {
                Ok(mut list) => {
                    list.truncate(MAX_RECENT_SEARCHES);
                    list
                }
                Err(e) => {
                    warn!(error = %e, "discarding malformed recent searches");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read recent searches");
                Vec::new()
            }
        };
        debug!(count = entries.len(), "recent searches loaded");
        Self { store, entries }
    }

    pub fn entries(&self) -> &[RecentSearch] { &self.entries }

    pub fn store(&self) -> &S { &self.store }

    /// Memory-only update; returns false for a blank query, which is ignored.
    pub fn apply(&mut self, query: &str, timestamp: i64) -> bool {
        if query.trim().is_empty() { return false; }
        self.entries = push_recent(&self.entries, query, timestamp);
        true
    }

    pub fn record(&mut self, query: &str) -> &[RecentSearch] {
        self.record_at(query, now_timestamp())
    }

    pub fn record_at(&mut self, query: &str, timestamp: i64) -> &[RecentSearch] {
        if self.apply(query, timestamp) {
            if let Err(e) = save(&self.store, &self.entries) {
                warn!(error = %e, "could not persist recent searches");
            }
        }
        &self.entries
    }
}
