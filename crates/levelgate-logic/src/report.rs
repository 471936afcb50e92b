//! Serializable progress summary.
//!
//! [`ProgressReport`] is what an outer layer (an HTTP route, a CLI) hands
//! back to its caller: the completed, accessible, and inaccessible levels
//! of one user under one progression mode. Accessible and inaccessible
//! together cover every catalog level exactly once.

use crate::schema::LevelId;
use crate::traversal::Progression;
use serde::{Deserialize, Serialize};

/// Level id with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub id: LevelId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub progression: Progression,
    pub completed: Vec<LevelSummary>,
    pub accessible: Vec<LevelSummary>,
    pub inaccessible: Vec<LevelSummary>,
}

impl ProgressReport {
    /// Fraction of catalog levels that are accessible (0.0–1.0).
    pub fn accessible_fraction(&self) -> f32 {
        let total = self.accessible.len() + self.inaccessible.len();
        if total == 0 {
            return 0.0;
        }
        self.accessible.len() as f32 / total as f32
    }
}
