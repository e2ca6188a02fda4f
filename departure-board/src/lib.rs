//! Transit departure board engine.
//!
//! Given a set of transit line records, each carrying raw timetable strings
//! for weekdays, Saturdays and Sundays, and the current instant, this crate
//! derives every departure occurring today, classifies each into a
//! lifecycle state (waiting, approaching, in transit, finished), orders
//! them for display, and projects a signed progress scalar for one selected
//! departure to animate a marker between the line's two endpoints.
//!
//! The engine holds no state between recomputations, performs no I/O, and
//! takes the clock as an explicit argument. The [`ticker`] module wraps it
//! in the two periodic cadences the views use.

pub mod domain;
pub mod engine;
pub mod lines;
pub mod ticker;
