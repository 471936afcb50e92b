//! The level graph: one user's view of the curriculum.
//!
//! A [`LevelGraph`] is built once from a [`LevelSchema`] snapshot. The
//! index and the completed set are derived eagerly during construction and
//! are read-only afterwards; every query is a pure read. When completion
//! records change, build a new graph (or call [`LevelGraph::recompute`]).
//!
//! Instances share nothing, so a concurrent host should build one per
//! request from request-scoped data.

use crate::completion::CompletedLevels;
use crate::error::ConstructionError;
use crate::index::LevelIndex;
use crate::report::{LevelSummary, ProgressReport};
use crate::schema::{CompletionRecord, Level, LevelId, LevelSchema};
use crate::traversal::{self, Progression};
use std::collections::{HashMap, HashSet};

/// Accessibility evaluator over a level catalog and a user's completions.
///
/// ```
/// use levelgate_logic::{CompletionRecord, Level, LevelGraph, LevelSchema, LevelState, Progression};
///
/// let schema = LevelSchema::new(
///     vec![
///         Level::entry("level_1", "First Level", ["level_2"]),
///         Level::new("level_2", "Second Level", Vec::<&str>::new()),
///         Level::new("level_3", "Inaccessible Level", ["level_4"]),
///         Level::new("level_4", "Second Inaccessible Level", Vec::<&str>::new()),
///     ],
///     vec![CompletionRecord::new("state_1", "level_1", LevelState::Complete)],
/// );
/// let graph = LevelGraph::new(schema).unwrap();
///
/// assert_eq!(graph.completed_names(), vec!["First Level"]);
/// assert_eq!(graph.accessible_names(), vec!["First Level", "Second Level"]);
/// assert_eq!(
///     graph.inaccessible_names_with(Progression::Actual),
///     vec!["Inaccessible Level", "Second Inaccessible Level"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LevelGraph {
    schema: LevelSchema,
    index: LevelIndex,
    completed: CompletedLevels,
}

impl LevelGraph {
    /// Build a graph from a schema snapshot.
    ///
    /// Fails only when the schema has no levels.
    pub fn new(schema: LevelSchema) -> Result<Self, ConstructionError> {
        if schema.levels.is_empty() {
            return Err(ConstructionError::no_levels());
        }
        let index = LevelIndex::build(&schema.levels);
        let completed = CompletedLevels::derive(&index, &schema.completion_records);
        log::debug!(
            "Built level graph: {} levels, {} completion records, {} completed",
            index.len(),
            schema.completion_records.len(),
            completed.len()
        );
        Ok(Self {
            schema,
            index,
            completed,
        })
    }

    /// A new graph over the same catalog with different completion records.
    pub fn recompute(&self, completion_records: Vec<CompletionRecord>) -> Self {
        let completed = CompletedLevels::derive(&self.index, &completion_records);
        Self {
            schema: LevelSchema::new(self.schema.levels.clone(), completion_records),
            index: self.index.clone(),
            completed,
        }
    }

    // ── Catalog access ──────────────────────────────────────────────────

    pub fn schema(&self) -> &LevelSchema {
        &self.schema
    }

    pub fn levels(&self) -> &[Level] {
        &self.schema.levels
    }

    pub fn level(&self, id: &LevelId) -> Option<&Level> {
        self.index.position(id).map(|pos| &self.schema.levels[pos])
    }

    /// Catalog position of `id`, `None` if unknown.
    pub fn level_index(&self, id: &LevelId) -> Option<usize> {
        self.index.position(id)
    }

    /// The full id → position map.
    pub fn positions(&self) -> &HashMap<LevelId, usize> {
        self.index.positions()
    }

    pub fn valid_levels(&self) -> &HashSet<LevelId> {
        self.index.valid()
    }

    /// Keep only ids present in the catalog, in input order.
    pub fn filter_valid_levels(&self, ids: &[LevelId]) -> Vec<LevelId> {
        self.index.filter_valid(ids)
    }

    /// Display name for each id. Unknown ids map to `""`, so the output is
    /// always positionally aligned with the input.
    pub fn names(&self, ids: &[LevelId]) -> Vec<&str> {
        ids.iter()
            .map(|id| self.level(id).map_or("", |level| level.name.as_str()))
            .collect()
    }

    // ── Completion ──────────────────────────────────────────────────────

    /// Completed level ids in completion-record order.
    pub fn completed(&self) -> &[LevelId] {
        self.completed.ids()
    }

    pub fn completed_names(&self) -> Vec<&str> {
        self.names(self.completed())
    }

    /// Keep only ids that are completed, in input order.
    pub fn filter_completed_levels(&self, ids: &[LevelId]) -> Vec<LevelId> {
        ids.iter()
            .filter(|id| self.completed.contains(id))
            .cloned()
            .collect()
    }

    // ── Accessibility ───────────────────────────────────────────────────

    /// Levels the user can reach under gated progression.
    pub fn accessible(&self) -> Vec<LevelId> {
        self.accessible_with(Progression::Actual)
    }

    /// Levels reachable from the entry levels, each listed once in
    /// breadth-first first-visit order.
    pub fn accessible_with(&self, progression: Progression) -> Vec<LevelId> {
        traversal::reachable(
            &self.schema.levels,
            &self.index,
            &self.completed,
            progression,
        )
    }

    pub fn accessible_names(&self) -> Vec<&str> {
        self.accessible_names_with(Progression::Actual)
    }

    pub fn accessible_names_with(&self, progression: Progression) -> Vec<&str> {
        self.names(&self.accessible_with(progression))
    }

    pub fn inaccessible(&self) -> Vec<LevelId> {
        self.inaccessible_with(Progression::Actual)
    }

    /// Every known level that is not accessible, in catalog order.
    pub fn inaccessible_with(&self, progression: Progression) -> Vec<LevelId> {
        let accessible: HashSet<LevelId> = self.accessible_with(progression).into_iter().collect();
        self.catalog_ids()
            .filter(|id| !accessible.contains(*id))
            .cloned()
            .collect()
    }

    pub fn inaccessible_names(&self) -> Vec<&str> {
        self.inaccessible_names_with(Progression::Actual)
    }

    pub fn inaccessible_names_with(&self, progression: Progression) -> Vec<&str> {
        self.names(&self.inaccessible_with(progression))
    }

    pub fn is_accessible(&self, id: &LevelId, progression: Progression) -> bool {
        self.accessible_with(progression).contains(id)
    }

    /// Summary of completed, accessible, and inaccessible levels.
    pub fn report(&self, progression: Progression) -> ProgressReport {
        let accessible = self.accessible_with(progression);
        let reached: HashSet<&LevelId> = accessible.iter().collect();
        let inaccessible: Vec<LevelId> = self
            .catalog_ids()
            .filter(|id| !reached.contains(id))
            .cloned()
            .collect();

        ProgressReport {
            progression,
            completed: self.summaries(self.completed()),
            accessible: self.summaries(&accessible),
            inaccessible: self.summaries(&inaccessible),
        }
    }

    /// Distinct catalog ids in catalog order.
    fn catalog_ids(&self) -> impl Iterator<Item = &LevelId> {
        self.schema
            .levels
            .iter()
            .enumerate()
            .filter(|(i, level)| self.index.position(&level.id) == Some(*i))
            .map(|(_, level)| &level.id)
    }

    fn summaries(&self, ids: &[LevelId]) -> Vec<LevelSummary> {
        ids.iter()
            .zip(self.names(ids))
            .map(|(id, name)| LevelSummary {
                id: id.clone(),
                name: name.to_string(),
            })
            .collect()
    }
}
