//! Slot allocation, generation pipeline and KPI evaluation.
//!
//! # Algorithm
//!
//! [`SlotAllocator`] places sessions by uniform random draws with a
//! per-placement retry ceiling. It is neither exhaustive nor optimal: a
//! request that passes the feasibility checks may still fail on one seed
//! and succeed on another.
//!
//! # Pipeline
//!
//! [`TimetableGenerator`] wires validation, feasibility and allocation
//! together for a [`TimetableRequest`].
//!
//! # KPI
//!
//! [`TimetableKpi`] reports slot utilization and placed sessions.

mod allocator;
mod generator;
mod kpi;

pub use allocator::{AllocationReport, Rejection, RejectionCounts, SlotAllocator};
pub use generator::{time_seed, GeneratedTimetable, TimetableGenerator, TimetableRequest};
pub use kpi::TimetableKpi;
