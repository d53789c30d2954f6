//! End-to-end timetable generation.
//!
//! # Pipeline
//!
//! 1. Validate the request structure.
//! 2. Run the static feasibility checks.
//! 3. Build one all-free grid per section.
//! 4. Run the [`SlotAllocator`] with a seeded generator.
//!
//! The seed is either given explicitly or taken from the wall clock here,
//! at the boundary, so the allocator itself stays deterministic.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::allocator::{AllocationReport, SlotAllocator};
use crate::config::TimetableConfig;
use crate::error::{Result, TimetableError};
use crate::feasibility::check_feasibility;
use crate::models::{Subject, Timetable};
use crate::validation::validate_request;

/// Input container for timetable generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableRequest {
    /// Grid shape and limits.
    #[serde(default)]
    pub config: TimetableConfig,
    /// Subjects, in placement order.
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl TimetableRequest {
    /// Creates a request.
    pub fn new(config: TimetableConfig, subjects: Vec<Subject>) -> Self {
        Self { config, subjects }
    }

    /// Parses a request from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a request from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TimetableError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// A successfully generated timetable.
#[derive(Debug, Clone)]
pub struct GeneratedTimetable {
    /// The filled grids.
    pub timetable: Timetable,
    /// Seed that produced them.
    pub seed: u64,
    /// Allocation statistics.
    pub report: AllocationReport,
}

/// Runs validation, feasibility and allocation for a request.
///
/// Does not retry: a `PlacementExhausted` failure is returned as is, with
/// the seed logged so the caller can reproduce it or try another.
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableConfig;
/// use u_timetable::models::Subject;
/// use u_timetable::scheduler::{TimetableGenerator, TimetableRequest};
///
/// let request = TimetableRequest::new(
///     TimetableConfig::new(5, 4),
///     vec![
///         Subject::new("Math", 4).with_faculty("Alice"),
///         Subject::new("Physics", 3).with_faculty("Bob"),
///     ],
/// );
///
/// let generated = TimetableGenerator::new().with_seed(42).generate(&request).unwrap();
/// assert_eq!(generated.seed, 42);
/// assert_eq!(generated.timetable.booked_count(), 14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    seed: Option<u64>,
}

impl TimetableGenerator {
    /// Creates a generator that seeds from the clock.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fixes the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a timetable for the request.
    ///
    /// # Errors
    /// - `InvalidInput` with every structural problem found.
    /// - `CapacityExceeded` / `SubjectUnschedulable` from the feasibility check.
    /// - `PlacementExhausted` if random placement gave up.
    pub fn generate(&self, request: &TimetableRequest) -> Result<GeneratedTimetable> {
        let config = &request.config;
        let subjects = &request.subjects;

        validate_request(config, subjects).map_err(TimetableError::InvalidInput)?;
        check_feasibility(subjects, config)?;

        let seed = self.seed.unwrap_or_else(time_seed);
        let allocator = SlotAllocator::new().with_max_attempts(config.max_attempts);
        info!(
            "generating {} section(s) of {}x{} for {} subject(s), seed {seed}, ceiling {}",
            config.section_count(),
            config.working_days,
            config.periods_per_day,
            subjects.len(),
            allocator.max_attempts()
        );

        let mut timetable = Timetable::new(
            config.working_days,
            config.periods_per_day,
            config.section_names.iter().cloned(),
        );
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = allocator.allocate(subjects, &mut timetable, &mut rng)?;

        info!(
            "timetable complete: {} of {} slots booked",
            timetable.booked_count(),
            timetable.total_slots()
        );
        Ok(GeneratedTimetable {
            timetable,
            seed,
            report,
        })
    }
}

/// Seed derived from the current wall-clock time.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
