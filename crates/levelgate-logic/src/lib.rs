//! Pure level-progression logic for LevelGate.
//!
//! This crate contains all curriculum logic that is independent of any
//! server, database, or UI. Functions take plain data and return results,
//! making them unit-testable and portable across an HTTP layer, native CLI
//! tools, and anything else that needs to know which levels a user can
//! reach.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`completion`] | Completed-level derivation from completion records |
//! | [`error`] | Construction errors |
//! | [`graph`] | `LevelGraph` aggregate and its query API |
//! | [`index`] | Id → position index and valid-id set |
//! | [`report`] | Serializable progress report for outer layers |
//! | [`schema`] | Levels, completion records, level schema (serde model) |
//! | [`traversal`] | Gated/ungated breadth-first unlock traversal |
//!
//! ```
//! use levelgate_logic::{CompletionRecord, Level, LevelGraph, LevelSchema, LevelState};
//!
//! let schema = LevelSchema::new(
//!     vec![
//!         Level::entry("intro", "Intro", ["loops"]),
//!         Level::new("loops", "Loops", Vec::<&str>::new()),
//!     ],
//!     vec![CompletionRecord::new("s1", "intro", LevelState::Complete)],
//! );
//! let graph = LevelGraph::new(schema).unwrap();
//! assert_eq!(graph.accessible_names(), vec!["Intro", "Loops"]);
//! ```

pub mod completion;
pub mod error;
pub mod graph;
pub mod index;
pub mod report;
pub mod schema;
pub mod traversal;

pub use error::ConstructionError;
pub use graph::LevelGraph;
pub use report::{LevelSummary, ProgressReport};
pub use schema::{CompletionRecord, Level, LevelId, LevelSchema, LevelState};
pub use traversal::Progression;
