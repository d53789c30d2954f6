//! Weekly class timetabling for parallel sections.
//!
//! Places a fixed number of weekly sessions per subject into every
//! section's (day, period) grid, subject to three hard constraints:
//! no faculty teaches two sections at once, no subject runs in two
//! sections at once, and a subject never lands on one of its excluded days.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Faculty`, `Weekday`,
//!   `Booking`, `SectionGrid`, `Timetable`, `Violation`
//! - **`config`**: Grid dimensions, sections, limits and environment overrides
//! - **`validation`**: Input integrity checks (ranges, duplicate names, excluded days)
//! - **`feasibility`**: Static capacity pre-checks run before any random draw
//! - **`scheduler`**: Randomized `SlotAllocator`, `TimetableGenerator` pipeline, KPIs
//! - **`render`**: Text and JSON-ready views of a finished timetable
//! - **`error`**: `TimetableError` taxonomy
//!
//! # Limitations
//!
//! Placement is randomized with a bounded retry budget and no backtracking.
//! A request that passes the feasibility checks can still fail with
//! `PlacementExhausted` under one seed and succeed under another. This is
//! expected behavior, not a bug; retrying with a fresh seed is up to the
//! caller.

pub mod config;
pub mod error;
pub mod feasibility;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
