//! In-memory match store
//!
//! Maps match ids to result strings. Backed by a `DashMap`, so updates to
//! different matches proceed independently while a read-modify-write on one
//! match holds that entry's lock for its whole duration.

use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use tracing::{debug, info};
use types::errors::MatchError;
use types::ids::MatchId;
use types::result::Match;

use crate::config::LookupPolicy;

/// Keyed collection of match results
#[derive(Debug, Default)]
pub struct MatchStore {
    matches: DashMap<MatchId, String>,
    /// Matches that exist, with empty results, after construction and `reset`
    seed: Vec<MatchId>,
}

impl MatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with empty matches
    pub fn with_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = MatchId>,
    {
        let store = Self {
            matches: DashMap::new(),
            seed: seed.into_iter().collect(),
        };
        store.load_seed();
        store
    }

    /// Look up a match
    pub fn get(&self, match_id: MatchId) -> Option<Match> {
        self.matches.get(&match_id).map(|entry| Match {
            match_id,
            match_result: entry.value().clone(),
        })
    }

    /// Look up a match, creating it with an empty result if absent
    pub fn get_or_create(&self, match_id: MatchId) -> Match {
        let entry = self.entry_or_create(match_id);
        Match {
            match_id,
            match_result: entry.value().clone(),
        }
    }

    /// Look up a match that must already exist
    pub fn get_existing(&self, match_id: MatchId) -> Result<Match, MatchError> {
        self.get(match_id).ok_or(MatchError::NotFound { match_id })
    }

    /// Overwrite a match's result, creating the match if needed
    pub fn set(&self, match_id: MatchId, result: impl Into<String>) {
        self.matches.insert(match_id, result.into());
    }

    /// Atomically replace a match's result with `f(current)`
    ///
    /// The entry stays locked while `f` runs, so concurrent updates to the
    /// same match cannot interleave. If `f` fails the stored result is left
    /// as it was.
    pub fn update<F>(
        &self,
        match_id: MatchId,
        lookup: LookupPolicy,
        f: F,
    ) -> Result<String, MatchError>
    where
        F: FnOnce(&str) -> Result<String, MatchError>,
    {
        let mut entry = match lookup {
            LookupPolicy::AutoCreate => self.entry_or_create(match_id),
            LookupPolicy::StrictExists => self
                .matches
                .get_mut(&match_id)
                .ok_or(MatchError::NotFound { match_id })?,
        };

        let next = f(entry.value())?;
        entry.value_mut().clone_from(&next);
        Ok(next)
    }

    /// Restore the store to its seed state
    pub fn reset(&self) {
        self.matches.clear();
        self.load_seed();
        info!(seeded = self.seed.len(), "Match store reset");
    }

    /// All matches, ordered by id
    pub fn snapshot(&self) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .matches
            .iter()
            .map(|entry| Match {
                match_id: *entry.key(),
                match_result: entry.value().clone(),
            })
            .collect();
        matches.sort_by_key(|m| m.match_id);
        matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn entry_or_create(&self, match_id: MatchId) -> RefMut<'_, MatchId, String> {
        match self.matches.entry(match_id) {
            Entry::Occupied(entry) => entry.into_ref(),
            Entry::Vacant(entry) => {
                debug!(match_id = %match_id, "Creating match");
                entry.insert(String::new())
            }
        }
    }

    fn load_seed(&self) {
        for match_id in &self.seed {
            self.matches.insert(*match_id, String::new());
        }
    }
}
