//! Fixture-backed line source.
//!
//! Loads line records from a JSON file and serves them as if they came
//! from the live fetch layer. Useful for development and tests without
//! upstream access.

use std::path::Path;

use crate::domain::ScheduleLine;

use super::{LineSource, LineSourceError};

/// Line source backed by a JSON file of line records.
#[derive(Debug, Clone)]
pub struct FixtureLines {
    lines: Vec<ScheduleLine>,
}

impl FixtureLines {
    /// Load line records from a JSON file containing an array of records
    /// in the upstream camelCase shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LineSourceError> {
        let raw = std::fs::read_to_string(path)?;
        let lines = serde_json::from_str(&raw)?;
        Ok(Self { lines })
    }

    /// Create a source from already-built records.
    pub fn from_lines(lines: Vec<ScheduleLine>) -> Self {
        Self { lines }
    }

    /// Number of lines in the fixture.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the fixture holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSource for FixtureLines {
    fn fetch_lines(&self) -> Result<Vec<ScheduleLine>, LineSourceError> {
        Ok(self.lines.clone())
    }
}
