//! Level catalog data model.
//!
//! A [`LevelSchema`] is the snapshot a caller hands to
//! [`LevelGraph::new`](crate::LevelGraph::new): the ordered level catalog
//! plus the user's completion records. It arrives from an external store
//! already validated, so this module only describes shape, not policy.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "levels": [
//!     { "id": "level_1", "name": "First Level", "unlocks": ["level_2"], "isEntry": true }
//!   ],
//!   "completionRecords": [
//!     { "id": "state_1", "levelId": "level_1", "state": "complete" }
//!   ]
//! }
//! ```
//!
//! The older catalog export (`_id`, `first`, `userLevelStates`, `level`)
//! deserializes into the same types through field aliases.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque level identifier. Only equality and hashing are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(String);

impl LevelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LevelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LevelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for LevelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single level in the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    #[serde(alias = "_id")]
    pub id: LevelId,
    /// Display name.
    pub name: String,
    /// Levels this one grants access to once satisfied. May reference ids
    /// that are not in the catalog.
    #[serde(default)]
    pub unlocks: Vec<LevelId>,
    /// Graph root: reachable with no prerequisite.
    #[serde(default, alias = "first")]
    pub is_entry: bool,
}

impl Level {
    /// Create a non-entry level.
    pub fn new<I, U>(id: impl Into<LevelId>, name: impl Into<String>, unlocks: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<LevelId>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            unlocks: unlocks.into_iter().map(Into::into).collect(),
            is_entry: false,
        }
    }

    /// Create an entry level.
    pub fn entry<I, U>(id: impl Into<LevelId>, name: impl Into<String>, unlocks: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<LevelId>,
    {
        Self {
            is_entry: true,
            ..Self::new(id, name, unlocks)
        }
    }
}

/// Per-user state of a level. Only [`LevelState::Complete`] gates progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelState {
    Started,
    Complete,
    /// Any state this crate does not recognize. Ignored, never rejected.
    #[serde(other)]
    Unknown,
}

/// A user's recorded state for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Record identifier (not a level id).
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "level")]
    pub level_id: LevelId,
    pub state: LevelState,
}

impl CompletionRecord {
    pub fn new(id: impl Into<String>, level_id: impl Into<LevelId>, state: LevelState) -> Self {
        Self {
            id: id.into(),
            level_id: level_id.into(),
            state,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == LevelState::Complete
    }
}

/// Level catalog plus the completion records of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSchema {
    #[serde(default)]
    pub levels: Vec<Level>,
    #[serde(default, alias = "userLevelStates")]
    pub completion_records: Vec<CompletionRecord>,
}

impl LevelSchema {
    pub fn new(levels: Vec<Level>, completion_records: Vec<CompletionRecord>) -> Self {
        Self {
            levels,
            completion_records,
        }
    }
}
