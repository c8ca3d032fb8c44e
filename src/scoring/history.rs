//! Learner difficulty history
//!
//! An ordered collection keyed by concept id. Re-rating a concept overwrites
//! its entry in place, so a key never appears twice and insertion order is
//! kept for everything else. The JSON snapshot is a plain array of entries,
//! which is what the storage layer persists per learner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::scoring::config::DifficultyParams;
use crate::scoring::difficulty::compute_internal_difficulty_with;
use crate::scoring::types::{clamp_unit, ConceptRating, DifficultyEntry, RecordOutcome};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DifficultyHistory {
    entries: Vec<DifficultyEntry>,
}

impl DifficultyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from raw entries; a repeated key overwrites the
    /// earlier entry in place.
    pub fn from_entries(entries: Vec<DifficultyEntry>) -> Self {
        let raw_len = entries.len();
        let mut history = Self {
            entries: Vec::with_capacity(raw_len),
        };
        for entry in entries {
            history.upsert(entry);
        }
        if history.len() < raw_len {
            tracing::warn!(
                raw = raw_len,
                kept = history.len(),
                "collapsed duplicate concept ids in difficulty history"
            );
        }
        history
    }

    /// Returns `true` when an existing entry was overwritten.
    pub fn upsert(&mut self, entry: DifficultyEntry) -> bool {
        match self.position(&entry.concept_id) {
            Some(idx) => {
                self.entries[idx] = entry;
                true
            }
            None => {
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn record(
        &mut self,
        concept_id: impl Into<String>,
        concept_difficulty: f64,
        user_rated_difficulty: f64,
        now: DateTime<Utc>,
        params: &DifficultyParams,
    ) -> RecordOutcome {
        let internal =
            compute_internal_difficulty_with(concept_difficulty, user_rated_difficulty, params);
        let entry = DifficultyEntry {
            concept_id: concept_id.into(),
            value: internal,
            user: Some(clamp_unit(user_rated_difficulty)),
            timestamp: now,
        };
        let updated = self.upsert(entry);
        RecordOutcome { internal, updated }
    }

    pub fn get(&self, concept_id: &str) -> Option<&DifficultyEntry> {
        self.entries.iter().find(|e| e.concept_id == concept_id)
    }

    pub fn contains(&self, concept_id: &str) -> bool {
        self.position(concept_id).is_some()
    }

    pub fn rating_for(&self, concept_id: &str) -> ConceptRating {
        match self.get(concept_id) {
            Some(entry) => ConceptRating {
                exists: true,
                rating: entry.user,
                timestamp: Some(entry.timestamp),
            },
            None => ConceptRating {
                exists: false,
                rating: None,
                timestamp: None,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DifficultyEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[DifficultyEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DifficultyEntry> {
        self.entries
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    fn position(&self, concept_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.concept_id == concept_id)
    }
}

impl<'de> Deserialize<'de> for DifficultyHistory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<DifficultyEntry>::deserialize(deserializer).map(Self::from_entries)
    }
}

impl<'a> IntoIterator for &'a DifficultyHistory {
    type Item = &'a DifficultyEntry;
    type IntoIter = std::slice::Iter<'a, DifficultyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<DifficultyEntry> for DifficultyHistory {
    fn from_iter<I: IntoIterator<Item = DifficultyEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
