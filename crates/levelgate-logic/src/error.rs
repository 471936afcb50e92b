//! Error types for level graph construction.
//!
//! Construction is the only fallible operation. Lookup misses (unknown ids,
//! dangling unlocks, completion records for levels that do not exist) are
//! tolerated by the query API and never surface here.

use thiserror::Error;

/// Errors that can occur while building a [`LevelGraph`](crate::LevelGraph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructionError {
    /// The schema is missing its levels or has none.
    #[error("invalid level schema: {reason}")]
    InvalidSchema {
        /// What is wrong with the schema
        reason: &'static str,
    },
}

impl ConstructionError {
    /// Schema with an empty (or absent) level sequence.
    pub fn no_levels() -> Self {
        Self::InvalidSchema {
            reason: "no levels defined",
        }
    }
}
