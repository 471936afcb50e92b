//! Completed-level derivation.
//!
//! A level counts as completed when at least one completion record marks
//! it [`LevelState::Complete`](crate::LevelState::Complete) and it exists in
//! the catalog. Other states are ignored. Records that name unknown levels
//! are dropped.

use crate::index::LevelIndex;
use crate::schema::{CompletionRecord, LevelId};
use std::collections::HashSet;

/// Completed level ids in completion-record order, each listed once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedLevels {
    ids: Vec<LevelId>,
    set: HashSet<LevelId>,
}

impl CompletedLevels {
    /// Derive the completed set from an index and a user's records.
    pub fn derive(index: &LevelIndex, records: &[CompletionRecord]) -> Self {
        let mut ids = Vec::new();
        let mut set = HashSet::new();
        for record in records.iter().filter(|r| r.is_complete()) {
            if !index.contains(&record.level_id) {
                log::warn!(
                    "Completion record {} references unknown level {}",
                    record.id,
                    record.level_id
                );
                continue;
            }
            if set.insert(record.level_id.clone()) {
                ids.push(record.level_id.clone());
            }
        }
        Self { ids, set }
    }

    pub fn ids(&self) -> &[LevelId] {
        &self.ids
    }

    pub fn contains(&self, id: &LevelId) -> bool {
        self.set.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
