//! Breadth-first unlock traversal.
//!
//! Accessibility starts from every entry level (catalog order) and walks
//! `unlocks` edges one depth at a time. Under [`Progression::Actual`] a
//! level's unlocks are only followed once that level is completed; under
//! [`Progression::Structural`] every reached level is expanded.
//!
//! Guarantees:
//! - Each level appears at most once, in first-visit order.
//! - Unlock ids that are not in the catalog are never emitted or expanded.
//! - Terminates on cyclic unlock graphs; a visited level is never
//!   expanded twice.

use crate::completion::CompletedLevels;
use crate::index::LevelIndex;
use crate::schema::{Level, LevelId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether unlock expansion is gated by completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    /// Gated: a level's unlocks open only after it is completed.
    #[default]
    Actual,
    /// Ungated: reachability by graph structure alone.
    Structural,
}

impl Progression {
    fn expands(self, id: &LevelId, completed: &CompletedLevels) -> bool {
        match self {
            Progression::Actual => completed.contains(id),
            Progression::Structural => true,
        }
    }
}

impl From<bool> for Progression {
    /// `true` mirrors an `actualProgression` flag.
    fn from(actual: bool) -> Self {
        if actual {
            Progression::Actual
        } else {
            Progression::Structural
        }
    }
}

/// All levels reachable from the entry levels, in first-visit order.
pub fn reachable(
    levels: &[Level],
    index: &LevelIndex,
    completed: &CompletedLevels,
    progression: Progression,
) -> Vec<LevelId> {
    let mut visited: HashSet<&LevelId> = HashSet::new();
    let mut order = Vec::new();
    let mut frontier = Vec::new();

    for level in levels.iter().filter(|l| l.is_entry) {
        if visited.insert(&level.id) {
            order.push(level.id.clone());
            if progression.expands(&level.id, completed) {
                frontier.push(&level.id);
            }
        }
    }

    let mut depth = 0usize;
    while !frontier.is_empty() {
        log::trace!("Unlock depth {}: expanding {} levels", depth, frontier.len());
        let mut next = Vec::new();
        for id in frontier {
            let Some(pos) = index.position(id) else {
                continue;
            };
            for unlocked in &levels[pos].unlocks {
                if !index.contains(unlocked) || !visited.insert(unlocked) {
                    continue;
                }
                order.push(unlocked.clone());
                if progression.expands(unlocked, completed) {
                    next.push(unlocked);
                }
            }
        }
        frontier = next;
        depth += 1;
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CompletionRecord, LevelState};

    fn ids(raw: &[&str]) -> Vec<LevelId> {
        raw.iter().map(|&s| LevelId::from(s)).collect()
    }

    fn run(levels: &[Level], done: &[&str], progression: Progression) -> Vec<LevelId> {
        let index = LevelIndex::build(levels);
        let records: Vec<_> = done
            .iter()
            .enumerate()
            .map(|(i, &id)| CompletionRecord::new(format!("s{}", i), id, LevelState::Complete))
            .collect();
        let completed = CompletedLevels::derive(&index, &records);
        reachable(levels, &index, &completed, progression)
    }

    fn chain() -> Vec<Level> {
        // a -> b -> c -> d
        vec![
            Level::entry("a", "A", ["b"]),
            Level::new("b", "B", ["c"]),
            Level::new("c", "C", ["d"]),
            Level::new("d", "D", Vec::<&str>::new()),
        ]
    }

    #[test]
    fn test_entry_reachable_without_completion() {
        assert_eq!(run(&chain(), &[], Progression::Actual), ids(&["a"]));
    }

    #[test]
    fn test_gated_stops_at_first_incomplete() {
        assert_eq!(run(&chain(), &["a"], Progression::Actual), ids(&["a", "b"]));
        assert_eq!(
            run(&chain(), &["a", "b"], Progression::Actual),
            ids(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_completion_off_the_path_does_not_open_anything() {
        // c is complete but b is not, so c is never reached.
        assert_eq!(run(&chain(), &["a", "c"], Progression::Actual), ids(&["a", "b"]));
    }

    #[test]
    fn test_structural_reaches_whole_chain() {
        assert_eq!(
            run(&chain(), &[], Progression::Structural),
            ids(&["a", "b", "c", "d"])
        );
    }

    #[test]
    fn test_breadth_first_order() {
        //     a
        //    / \
        //   b   c
        //   |   |
        //   d   e
        let levels = vec![
            Level::entry("a", "A", ["b", "c"]),
            Level::new("b", "B", ["d"]),
            Level::new("c", "C", ["e"]),
            Level::new("d", "D", Vec::<&str>::new()),
            Level::new("e", "E", Vec::<&str>::new()),
        ];
        assert_eq!(
            run(&levels, &[], Progression::Structural),
            ids(&["a", "b", "c", "d", "e"])
        );
    }

    #[test]
    fn test_diamond_lists_child_once() {
        //   a
        //  / \
        // b   c
        //  \ /
        //   d
        let levels = vec![
            Level::entry("a", "A", ["b", "c"]),
            Level::new("b", "B", ["d"]),
            Level::new("c", "C", ["d"]),
            Level::new("d", "D", Vec::<&str>::new()),
        ];
        let gated = run(&levels, &["a", "b", "c"], Progression::Actual);
        assert_eq!(gated, ids(&["a", "b", "c", "d"]));
        let structural = run(&levels, &[], Progression::Structural);
        assert_eq!(structural, ids(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_cycle_terminates() {
        // a -> b -> c -> a
        let levels = vec![
            Level::entry("a", "A", ["b"]),
            Level::new("b", "B", ["c"]),
            Level::new("c", "C", ["a"]),
        ];
        assert_eq!(run(&levels, &[], Progression::Structural), ids(&["a", "b", "c"]));
        assert_eq!(
            run(&levels, &["a", "b", "c"], Progression::Actual),
            ids(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_self_unlock_terminates() {
        let levels = vec![Level::entry("a", "A", ["a", "b"]), Level::new("b", "B", ["b"])];
        assert_eq!(run(&levels, &["a", "b"], Progression::Actual), ids(&["a", "b"]));
    }

    #[test]
    fn test_dangling_unlock_dropped() {
        let levels = vec![
            Level::entry("a", "A", ["ghost", "b"]),
            Level::new("b", "B", Vec::<&str>::new()),
        ];
        assert_eq!(run(&levels, &[], Progression::Structural), ids(&["a", "b"]));
    }

    #[test]
    fn test_multiple_entries_in_catalog_order() {
        let levels = vec![
            Level::new("x", "X", Vec::<&str>::new()),
            Level::entry("b", "B", ["x"]),
            Level::entry("a", "A", Vec::<&str>::new()),
        ];
        assert_eq!(run(&levels, &["b"], Progression::Actual), ids(&["b", "a", "x"]));
    }

    #[test]
    fn test_no_entries_reaches_nothing() {
        let levels = vec![Level::new("a", "A", ["b"]), Level::new("b", "B", Vec::<&str>::new())];
        assert!(run(&levels, &["a"], Progression::Structural).is_empty());
    }

    #[test]
    fn test_progression_from_bool() {
        assert_eq!(Progression::from(true), Progression::Actual);
        assert_eq!(Progression::from(false), Progression::Structural);
        assert_eq!(Progression::default(), Progression::Actual);
    }
}
