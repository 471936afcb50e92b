//! Lookup structures derived from the level catalog.
//!
//! `LevelIndex` is built once from the ordered level list and never
//! mutated: it maps each id to its catalog position and keeps the set of
//! ids that exist. Everything that has to neutralize dangling references
//! (unlocks or completion records naming levels that are not in the
//! catalog) goes through [`LevelIndex::contains`] or
//! [`LevelIndex::filter_valid`].

use crate::schema::{Level, LevelId};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Id → position index plus the valid-id set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelIndex {
    positions: HashMap<LevelId, usize>,
    valid: HashSet<LevelId>,
}

impl LevelIndex {
    /// Index a level catalog. On duplicate ids the first occurrence wins.
    pub fn build(levels: &[Level]) -> Self {
        let mut positions = HashMap::with_capacity(levels.len());
        for (i, level) in levels.iter().enumerate() {
            match positions.entry(level.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(first) => {
                    log::warn!(
                        "Duplicate level id {} at position {} (keeping position {})",
                        level.id,
                        i,
                        first.get()
                    );
                }
            }
        }
        let valid = positions.keys().cloned().collect();
        Self { positions, valid }
    }

    /// Catalog position of `id`, or `None` if it is not a known level.
    pub fn position(&self, id: &LevelId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &LevelId) -> bool {
        self.valid.contains(id)
    }

    /// Number of distinct level ids.
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// The id → position map.
    pub fn positions(&self) -> &HashMap<LevelId, usize> {
        &self.positions
    }

    /// The set of known level ids.
    pub fn valid(&self) -> &HashSet<LevelId> {
        &self.valid
    }

    /// Keep only known ids, preserving input order. Unknown ids are dropped.
    pub fn filter_valid(&self, ids: &[LevelId]) -> Vec<LevelId> {
        ids.iter().filter(|id| self.contains(id)).cloned().collect()
    }
}
