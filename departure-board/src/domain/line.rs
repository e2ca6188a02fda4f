//! Transit line records.
//!
//! These types map directly to the line records produced by the external
//! fetch layer. The timetable fields are free-form strings and are never
//! parsed eagerly; the generator scans them on every recompute, so bad
//! upstream data degrades to zero departures instead of failing the fetch.

use serde::Deserialize;

use super::DayType;

/// Operating status of a line.
///
/// Anything other than `Operational` means the line contributes zero
/// departures, whatever its timetable strings contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Operational,
    Maintenance,
    Interrupted,
}

impl LineStatus {
    /// Returns true if the line is currently running its schedule.
    pub fn is_operational(&self) -> bool {
        matches!(self, LineStatus::Operational)
    }
}

/// A transit line record, as fetched by the external collaborator.
///
/// Callers pass the full fetched list through unfiltered; gating on
/// [`LineStatus`] happens inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLine {
    /// Upstream record identifier.
    pub id: String,

    /// Short display code (e.g. "L1").
    pub line_code: String,

    /// Full display name.
    pub line_name: String,

    /// Destination display string.
    pub destination: String,

    /// Name of the origin endpoint.
    pub point_a: String,

    /// Name of the destination endpoint.
    pub point_b: String,

    /// Operating status; only operational lines generate departures.
    pub status: LineStatus,

    /// Raw Monday-Friday timetable.
    pub times_weekday: String,

    /// Raw Saturday timetable.
    pub times_saturday: String,

    /// Raw Sunday timetable.
    pub times_sunday: String,
}

impl ScheduleLine {
    /// Returns the raw timetable string for a day-type.
    pub fn timetable_for(&self, day_type: DayType) -> &str {
        match day_type {
            DayType::Weekday => &self.times_weekday,
            DayType::Saturday => &self.times_saturday,
            DayType::Sunday => &self.times_sunday,
        }
    }
}
