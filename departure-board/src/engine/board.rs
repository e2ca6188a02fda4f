//! Status classification and board ordering.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{DepartureInstance, ScheduleLine};

use super::config::EngineConfig;
use super::generate::generate_departures;

/// Compute the ordered departure board for a set of lines at an instant.
///
/// The board is rebuilt from scratch on every call: each operational line's
/// timetable is re-scanned, every departure re-classified against `now`,
/// and the whole list re-sorted. Identical inputs produce an identical
/// board, so callers can recompute on a timer without diffing.
///
/// Ordering: approaching first, then in-transit, then waiting, then
/// finished; within a state by scheduled departure time, then by line code
/// so that the order is total.
///
/// An empty board is a valid result ("nothing scheduled today").
pub fn compute_board(
    lines: &[ScheduleLine],
    now: NaiveDateTime,
    config: &EngineConfig,
) -> Vec<DepartureInstance> {
    let mut board: Vec<DepartureInstance> = lines
        .iter()
        .flat_map(|line| generate_departures(line, now, config))
        .map(|departure| DepartureInstance::classify(departure, now))
        .collect();

    board.sort_by(|a, b| {
        a.state
            .sort_priority()
            .cmp(&b.state.sort_priority())
            .then_with(|| a.scheduled_departure().cmp(&b.scheduled_departure()))
            .then_with(|| a.departure.line_code.cmp(&b.departure.line_code))
    });

    debug!(lines = lines.len(), entries = board.len(), "board recomputed");

    board
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::LineStatus;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    prop_compose! {
        fn timetable()(tokens in prop::collection::vec((0u32..24, 0u32..60), 0..6)) -> String {
            tokens
                .into_iter()
                .map(|(h, m)| format!("{h:02}:{m:02}"))
                .collect::<Vec<_>>()
                .join(",")
        }
    }

    fn status() -> impl Strategy<Value = LineStatus> {
        prop_oneof![
            Just(LineStatus::Operational),
            Just(LineStatus::Maintenance),
            Just(LineStatus::Interrupted),
        ]
    }

    prop_compose! {
        fn schedule_line()(
            n in 0u32..100,
            status in status(),
            weekday in timetable(),
        ) -> ScheduleLine {
            ScheduleLine {
                id: format!("linha-{n:02}"),
                line_code: format!("L{n}"),
                line_name: format!("Linha {n}"),
                destination: "Centro".to_string(),
                point_a: "Terminal Norte".to_string(),
                point_b: "Centro".to_string(),
                status,
                times_weekday: weekday,
                times_saturday: "Não informado".to_string(),
                times_sunday: "Não informado".to_string(),
            }
        }
    }

    prop_compose! {
        fn instant()(offset_mins in 0i64..(24 * 60)) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                + Duration::minutes(offset_mins)
        }
    }

    proptest! {
        /// Adjacent board entries always satisfy the ordering contract
        #[test]
        fn board_is_sorted(
            lines in prop::collection::vec(schedule_line(), 0..6),
            now in instant(),
        ) {
            let board = compute_board(&lines, now, &EngineConfig::default());

            for pair in board.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.state.sort_priority() <= b.state.sort_priority());
                if a.state.sort_priority() == b.state.sort_priority() {
                    prop_assert!(a.scheduled_departure() <= b.scheduled_departure());
                }
            }
        }

        /// Computing the same board twice yields the same list
        #[test]
        fn board_is_idempotent(
            lines in prop::collection::vec(schedule_line(), 0..6),
            now in instant(),
        ) {
            let config = EngineConfig::default();
            prop_assert_eq!(
                compute_board(&lines, now, &config),
                compute_board(&lines, now, &config)
            );
        }

        /// Non-operational lines never reach the board
        #[test]
        fn only_operational_lines_contribute(
            lines in prop::collection::vec(schedule_line(), 0..6),
            now in instant(),
        ) {
            let operational: usize = lines
                .iter()
                .filter(|l| l.status.is_operational())
                .map(|l| compute_board(std::slice::from_ref(l), now, &EngineConfig::default()).len())
                .sum();

            let board = compute_board(&lines, now, &EngineConfig::default());
            prop_assert_eq!(board.len(), operational);
        }
    }
}
