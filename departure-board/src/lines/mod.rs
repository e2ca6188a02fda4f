//! Line snapshot sources.
//!
//! The engine never fetches anything itself: an external collaborator
//! produces the line list before the engine is invoked, and every board is
//! computed against that immutable snapshot. [`LineSource`] is the
//! in-process contract for that collaborator; [`FixtureLines`] is a
//! file-backed implementation for development and tests.

mod fixture;

pub use fixture::FixtureLines;

use crate::domain::ScheduleLine;

/// Error from a line source.
#[derive(Debug, thiserror::Error)]
pub enum LineSourceError {
    /// Reading the underlying data failed.
    #[error("failed to read line data: {0}")]
    Io(#[from] std::io::Error),

    /// The data was not a valid line list.
    #[error("malformed line data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Provider of line-record snapshots.
///
/// This abstraction keeps the engine decoupled from wherever the records
/// actually live and lets tests substitute canned data.
pub trait LineSource {
    /// Fetch the current snapshot of line records.
    ///
    /// Implementations must not pre-filter: non-operational lines are part
    /// of the contract and contribute zero departures downstream.
    fn fetch_lines(&self) -> Result<Vec<ScheduleLine>, LineSourceError>;
}
