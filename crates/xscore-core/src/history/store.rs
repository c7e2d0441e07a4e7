use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::matches::Match;
use crate::storage::{DocumentStore, MATCHES_KEY, load_document, save_document};

/// Maximum number of matches kept
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded, most-recent-first log of completed tracked matches
pub struct HistoryStore<S: DocumentStore> {
    matches: Vec<Match>,
    storage: S,
    revision: u64,
}

impl<S: DocumentStore> HistoryStore<S> {
    /// Hydrate from storage.
    ///
    /// Simple or unfinished matches and duplicate ids left by older writers
    /// are dropped, and entries are ordered newest first by completion time.
    /// Entries without a completion time sort after stamped ones, keeping
    /// their stored order.
    pub fn load(storage: S) -> Self {
        let stored: Vec<Match> = load_document(&storage, MATCHES_KEY).unwrap_or_default();
        let stored_count = stored.len();

        let mut seen = HashSet::new();
        let mut matches: Vec<Match> = stored
            .into_iter()
            .filter(|m| !m.is_simple() && m.is_completed())
            .filter(|m| seen.insert(m.id()))
            .collect();
        matches.sort_by_key(|m| Reverse(m.completed_at()));
        matches.truncate(HISTORY_CAPACITY);

        if matches.len() != stored_count {
            warn!(
                "Dropped {} stored matches (simple, unfinished, duplicate or over capacity)",
                stored_count - matches.len()
            );
        }
        info!("Loaded {} matches from history", matches.len());

        Self {
            matches,
            storage,
            revision: 0,
        }
    }

    /// Add a completed match at the head of the history.
    ///
    /// Returns false without touching the store for simple or unfinished
    /// matches and for ids already present.
    pub fn add_match(&mut self, m: &Match) -> bool {
        if m.is_simple() {
            debug!("Not recording simple match {}", m.id());
            return false;
        }
        if !m.is_completed() {
            debug!("Not recording unfinished match {}", m.id());
            return false;
        }
        if self.contains(m.id()) {
            debug!("Match {} already in history", m.id());
            return false;
        }

        self.matches.insert(0, m.clone());
        if self.matches.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.matches.pop() {
                debug!("Evicted match {} from history", evicted.id());
            }
        }
        self.revision += 1;
        info!("Recorded match {} ({} in history)", m.id(), self.matches.len());

        save_document(&mut self.storage, MATCHES_KEY, &self.matches);
        true
    }

    /// Stored matches, most recent first
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn get(&self, id: Uuid) -> Option<&Match> {
        self.matches.iter().find(|m| m.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Bumped on every mutation so views can poll for changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
