//! Progress projection for a selected departure.
//!
//! Maps an instant against one departure's approach and transit phases onto
//! a single signed scalar driving a marker animation between the line's two
//! endpoints: -101 parked before the origin, [-100, 0) approaching the
//! origin, [0, 100) travelling, 101 parked at the destination.

use chrono::NaiveDateTime;

use crate::domain::DepartureTimes;

/// Sentinel: the approach window has not opened yet.
pub const PROGRESS_NOT_STARTED: f64 = -101.0;

/// Sentinel: the departure has arrived.
pub const PROGRESS_ARRIVED: f64 = 101.0;

/// Project an instant onto a departure's progress scalar.
///
/// Pure function of its inputs; the caller re-evaluates it on whatever
/// cadence its view needs. How negative values and the sentinels are drawn
/// is the consumer's concern.
///
/// # Examples
///
/// ```
/// use departure_board::domain::DepartureTimes;
/// use departure_board::engine::{PROGRESS_ARRIVED, PROGRESS_NOT_STARTED, compute_progress};
/// use chrono::{Duration, NaiveDate};
///
/// let scheduled = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let times = DepartureTimes::around(scheduled, Duration::minutes(60), Duration::minutes(45));
///
/// assert_eq!(compute_progress(&times, times.approach_start()), -100.0);
/// assert_eq!(compute_progress(&times, scheduled), 0.0);
/// assert_eq!(compute_progress(&times, times.arrival()), PROGRESS_ARRIVED);
/// assert_eq!(
///     compute_progress(&times, times.approach_start() - Duration::milliseconds(1)),
///     PROGRESS_NOT_STARTED
/// );
/// ```
pub fn compute_progress(times: &DepartureTimes, now: NaiveDateTime) -> f64 {
    if now < times.approach_start() {
        PROGRESS_NOT_STARTED
    } else if now < times.scheduled_departure() {
        phase_fraction(times.approach_start(), times.scheduled_departure(), now) * 100.0 - 100.0
    } else if now < times.arrival() {
        phase_fraction(times.scheduled_departure(), times.arrival(), now) * 100.0
    } else {
        PROGRESS_ARRIVED
    }
}

/// Fraction of the way from `start` to `end`, at millisecond resolution.
///
/// Only called with `start <= now < end`, so the window is non-empty.
fn phase_fraction(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let elapsed = (now - start).num_milliseconds() as f64;
    let window = (end - start).num_milliseconds() as f64;
    elapsed / window
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::DepartureState;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    prop_compose! {
        fn departure_times()(
            hour in 0u32..24,
            minute in 0u32..60,
            approach_mins in 1i64..180,
            travel_mins in 1i64..180,
        ) -> DepartureTimes {
            let scheduled = NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap();
            DepartureTimes::around(
                scheduled,
                Duration::minutes(approach_mins),
                Duration::minutes(travel_mins),
            )
        }
    }

    prop_compose! {
        fn instant()(offset_secs in -36_000i64..72_000) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
                + Duration::seconds(offset_secs)
        }
    }

    proptest! {
        /// Output never leaves [-101, 101]
        #[test]
        fn output_is_bounded(times in departure_times(), now in instant()) {
            let value = compute_progress(&times, now);
            prop_assert!((PROGRESS_NOT_STARTED..=PROGRESS_ARRIVED).contains(&value));
        }

        /// Progress never decreases as the clock advances
        #[test]
        fn progress_is_monotonic(
            times in departure_times(),
            t1 in instant(),
            t2 in instant(),
        ) {
            let (earlier, later) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

            prop_assert!(compute_progress(&times, earlier) <= compute_progress(&times, later));
        }

        /// The value range agrees with the lifecycle state
        #[test]
        fn range_matches_state(times in departure_times(), now in instant()) {
            let value = compute_progress(&times, now);

            match times.state_at(now) {
                DepartureState::Waiting => prop_assert_eq!(value, PROGRESS_NOT_STARTED),
                DepartureState::Approaching => {
                    prop_assert!((-100.0..0.0).contains(&value));
                }
                DepartureState::InTransit => {
                    prop_assert!((0.0..100.0).contains(&value));
                }
                DepartureState::Finished => prop_assert_eq!(value, PROGRESS_ARRIVED),
            }
        }
    }
}
