//! Derived departure types.
//!
//! A departure instance is born on a recompute pass from a line's timetable
//! and the clock, classified, displayed, and discarded on the next pass.
//! Nothing here is ever mutated in place or persisted; re-running the same
//! computation with the same inputs reproduces the same instances.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Lifecycle state of a departure relative to the clock it was computed
/// with.
///
/// The state is a pure function of the clock against the departure's three
/// instants. There are no stored transitions: re-evaluating with a later
/// clock can only move the state forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartureState {
    /// The approach window has not opened yet.
    Waiting,

    /// Inside the approach window, not yet departed.
    Approaching,

    /// Departed, not yet arrived.
    InTransit,

    /// At or past the arrival time.
    Finished,
}

impl DepartureState {
    /// Board ordering priority; lower sorts first.
    ///
    /// Imminent and currently-running departures surface above
    /// merely-scheduled ones; exhausted departures sink to the bottom
    /// without being hidden.
    pub fn sort_priority(&self) -> u8 {
        match self {
            DepartureState::Approaching => 1,
            DepartureState::InTransit => 2,
            DepartureState::Waiting => 3,
            DepartureState::Finished => 4,
        }
    }
}

impl fmt::Display for DepartureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepartureState::Waiting => "waiting",
            DepartureState::Approaching => "approaching",
            DepartureState::InTransit => "in_transit",
            DepartureState::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// The three instants that define one departure's lifecycle.
///
/// Built around the scheduled departure: the approach window opens before
/// it and the arrival follows it by the travel duration.
///
/// # Examples
///
/// ```
/// use departure_board::domain::{DepartureState, DepartureTimes};
/// use chrono::{Duration, NaiveDate};
///
/// let scheduled = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let times = DepartureTimes::around(scheduled, Duration::minutes(60), Duration::minutes(45));
///
/// assert_eq!(times.state_at(scheduled - Duration::minutes(90)), DepartureState::Waiting);
/// assert_eq!(times.state_at(scheduled - Duration::minutes(30)), DepartureState::Approaching);
/// assert_eq!(times.state_at(scheduled + Duration::minutes(10)), DepartureState::InTransit);
/// assert_eq!(times.state_at(scheduled + Duration::minutes(45)), DepartureState::Finished);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartureTimes {
    approach_start: NaiveDateTime,
    scheduled_departure: NaiveDateTime,
    arrival: NaiveDateTime,
}

impl DepartureTimes {
    /// Build the lifecycle instants around a scheduled departure.
    pub fn around(
        scheduled_departure: NaiveDateTime,
        approach_window: Duration,
        travel_duration: Duration,
    ) -> Self {
        Self {
            approach_start: scheduled_departure - approach_window,
            scheduled_departure,
            arrival: scheduled_departure + travel_duration,
        }
    }

    /// When the departure starts counting as approaching.
    pub fn approach_start(&self) -> NaiveDateTime {
        self.approach_start
    }

    /// The scheduled departure instant.
    pub fn scheduled_departure(&self) -> NaiveDateTime {
        self.scheduled_departure
    }

    /// The assumed arrival instant.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Classify the departure's state at a given instant.
    ///
    /// Each phase includes its lower bound and excludes its upper bound, so
    /// exactly one state holds for any clock value.
    pub fn state_at(&self, now: NaiveDateTime) -> DepartureState {
        if now < self.approach_start {
            DepartureState::Waiting
        } else if now < self.scheduled_departure {
            DepartureState::Approaching
        } else if now < self.arrival {
            DepartureState::InTransit
        } else {
            DepartureState::Finished
        }
    }
}

/// A dated departure generated from one timetable token, before
/// classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDeparture {
    /// Identifier of the line this departure belongs to.
    pub line_id: String,

    /// Short display code of the line.
    pub line_code: String,

    /// Full display name of the line.
    pub line_name: String,

    /// Origin endpoint name.
    pub point_a: String,

    /// Destination endpoint name.
    pub point_b: String,

    /// The departure's lifecycle instants.
    pub times: DepartureTimes,
}

/// A departure on the board: a scheduled departure classified against the
/// clock the board was computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureInstance {
    /// The underlying departure.
    pub departure: ScheduledDeparture,

    /// Lifecycle state at the instant the board was computed.
    pub state: DepartureState,
}

impl DepartureInstance {
    /// Classify a departure at a given instant.
    pub fn classify(departure: ScheduledDeparture, now: NaiveDateTime) -> Self {
        let state = departure.times.state_at(now);
        Self { departure, state }
    }

    /// The scheduled departure instant.
    pub fn scheduled_departure(&self) -> NaiveDateTime {
        self.departure.times.scheduled_departure()
    }
}
