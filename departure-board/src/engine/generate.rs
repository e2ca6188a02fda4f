//! Timetable parsing and instance generation.
//!
//! Turns one line's raw timetable string for the current day-type into
//! dated departure skeletons. Infallible: non-operational lines and
//! malformed timetable content both degrade to zero departures.

use chrono::NaiveDateTime;

use crate::domain::{DayType, DepartureTimes, ScheduleLine, ScheduledDeparture, scan_times};

use super::config::EngineConfig;

/// Generate today's departure skeletons for one line.
///
/// The day-type string is selected from `now`'s date and every valid
/// timetable token is dated to that same day. Non-operational lines are
/// skipped before any parsing happens.
pub fn generate_departures(
    line: &ScheduleLine,
    now: NaiveDateTime,
    config: &EngineConfig,
) -> Vec<ScheduledDeparture> {
    if !line.status.is_operational() {
        return Vec::new();
    }

    let today = now.date();
    let raw = line.timetable_for(DayType::for_date(today));

    scan_times(raw)
        .into_iter()
        .map(|token| ScheduledDeparture {
            line_id: line.id.clone(),
            line_code: line.line_code.clone(),
            line_name: line.line_name.clone(),
            point_a: line.point_a.clone(),
            point_b: line.point_b.clone(),
            times: DepartureTimes::around(
                token.at_date(today),
                config.approach_window(),
                config.travel_duration(),
            ),
        })
        .collect()
}
