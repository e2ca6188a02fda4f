//! Periodic recomputation of the board and the progress scalar.
//!
//! Two independent cadences drive the engine: the board is recomputed every
//! ten seconds for as long as its view is mounted, and the progress scalar
//! every five seconds while one departure is being observed. Each tick
//! re-runs the pure computation against an immutable snapshot and a fresh
//! clock reading; nothing is shared or mutated between the two loops.
//!
//! Both tickers release their timer task when dropped, so cancellation is
//! guaranteed on every exit path.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{DepartureInstance, DepartureTimes, ScheduleLine};
use crate::engine::{EngineConfig, compute_board, compute_progress};

/// How often the board is recomputed.
pub const BOARD_TICK: Duration = Duration::from_secs(10);

/// How often the selected departure's progress is recomputed.
pub const PROGRESS_TICK: Duration = Duration::from_secs(5);

/// Reads the device-local clock.
fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Periodically recomputed departure board.
///
/// Owns the timer task; dropping the ticker stops recomputation.
pub struct BoardTicker {
    rx: watch::Receiver<Vec<DepartureInstance>>,
    task: JoinHandle<()>,
}

impl BoardTicker {
    /// Start a board ticker on the default cadence and the local clock.
    ///
    /// The first board is computed immediately; subsequent boards are
    /// published once per tick.
    pub fn spawn(lines: Vec<ScheduleLine>, config: EngineConfig) -> Self {
        Self::spawn_with(lines, config, BOARD_TICK, local_now)
    }

    /// Start a board ticker with an explicit period and clock.
    ///
    /// Exists so tests and embedders can drive the ticker with a synthetic
    /// clock instead of the device's.
    pub fn spawn_with(
        lines: Vec<ScheduleLine>,
        config: EngineConfig,
        period: Duration,
        clock: impl Fn() -> NaiveDateTime + Send + 'static,
    ) -> Self {
        let (tx, rx) = watch::channel(compute_board(&lines, clock(), &config));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately and the initial board is
            // already published, so skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                let board = compute_board(&lines, clock(), &config);
                debug!(entries = board.len(), "board tick");
                if tx.send(board).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Subscribe to board snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Vec<DepartureInstance>> {
        self.rx.clone()
    }

    /// The most recently computed board.
    pub fn latest(&self) -> Vec<DepartureInstance> {
        self.rx.borrow().clone()
    }
}

impl Drop for BoardTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Periodically recomputed progress scalar for one selected departure.
///
/// Spawned when a departure's detail view opens and dropped when it
/// closes; nothing is computed while no ticker is alive.
pub struct ProgressTicker {
    rx: watch::Receiver<f64>,
    task: JoinHandle<()>,
}

impl ProgressTicker {
    /// Start a progress ticker on the default cadence and the local clock.
    pub fn spawn(times: DepartureTimes) -> Self {
        Self::spawn_with(times, PROGRESS_TICK, local_now)
    }

    /// Start a progress ticker with an explicit period and clock.
    pub fn spawn_with(
        times: DepartureTimes,
        period: Duration,
        clock: impl Fn() -> NaiveDateTime + Send + 'static,
    ) -> Self {
        let (tx, rx) = watch::channel(compute_progress(&times, clock()));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                let value = compute_progress(&times, clock());
                debug!(value, "progress tick");
                if tx.send(value).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Subscribe to progress values.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.rx.clone()
    }

    /// The most recently computed progress value.
    pub fn latest(&self) -> f64 {
        *self.rx.borrow()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
