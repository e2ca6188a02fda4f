//! The departure computation pipeline.
//!
//! Three stages, all pure functions of their inputs: timetable parsing with
//! instance generation, status classification with board ordering, and
//! on-demand progress projection for one selected departure. The clock is
//! always an explicit argument; recomputation cadence lives in
//! [`crate::ticker`].

mod board;
mod config;
mod generate;
mod progress;

pub use board::compute_board;
pub use config::EngineConfig;
pub use generate::generate_departures;
pub use progress::{PROGRESS_ARRIVED, PROGRESS_NOT_STARTED, compute_progress};
