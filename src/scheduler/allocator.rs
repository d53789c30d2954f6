//! Randomized slot allocator.
//!
//! # Algorithm
//!
//! For every section (outer loop) and every subject (inner loop, input
//! order):
//!
//! 1. Draw a random day, then a random period.
//! 2. Reject the draw if the slot is taken, the subject's faculty is booked
//!    at the same coordinate in another section, the subject itself is
//!    booked there in another section, or the day is excluded.
//! 3. Otherwise book it and reset the attempt counter.
//!
//! A subject is given up once `max_attempts` consecutive draws are rejected.
//! There is no backtracking: one exhausted subject fails the whole run.
//!
//! # Determinism
//! All draws come from one caller-supplied generator, in section-major,
//! subject-major, attempt-sequential order. Same seed, same timetable.
//!
//! # Complexity
//! O(s² × n × k) where s=sections, n=subjects, k=draws per placement.

use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_ATTEMPTS;
use crate::error::{Result, TimetableError};
use crate::models::{Booking, FacultyRoster, Subject, SubjectId, Timetable};

/// Why a random draw was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The slot already holds a booking in this section.
    Occupied,
    /// The faculty teaches another section at this slot.
    FacultyClash,
    /// The subject is taught in another section at this slot.
    SubjectClash,
    /// The day is excluded for the subject.
    ExcludedDay,
}

/// Rejected draws per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    /// Slot already booked in the same section.
    pub occupied: u64,
    /// Faculty busy in another section.
    pub faculty_clash: u64,
    /// Subject taught in another section.
    pub subject_clash: u64,
    /// Day excluded for the subject.
    pub excluded_day: u64,
}

impl RejectionCounts {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Occupied => self.occupied += 1,
            Rejection::FacultyClash => self.faculty_clash += 1,
            Rejection::SubjectClash => self.subject_clash += 1,
            Rejection::ExcludedDay => self.excluded_day += 1,
        }
    }

    /// Total rejected draws.
    pub fn total(&self) -> u64 {
        self.occupied + self.faculty_clash + self.subject_clash + self.excluded_day
    }
}

/// Statistics of one allocation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Random (day, period) draws made.
    pub draws: u64,
    /// Bookings written.
    pub placed: usize,
    /// Rejected draws by reason.
    pub rejections: RejectionCounts,
}

/// Places every subject's sessions into every section by random draws.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Subject, Timetable};
/// use u_timetable::scheduler::SlotAllocator;
///
/// let subjects = vec![Subject::new("Math", 4).with_faculty("A")];
/// let mut timetable = Timetable::new(5, 4, ["Section A", "Section B"]);
///
/// let report = SlotAllocator::new()
///     .allocate_seeded(&subjects, &mut timetable, 7)
///     .unwrap();
/// assert_eq!(report.placed, 8);
/// assert!(timetable.is_valid(&subjects));
/// ```
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    max_attempts: usize,
}

impl SlotAllocator {
    /// Creates an allocator with the default attempt ceiling.
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the attempt ceiling (consecutive rejected draws per placement).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The attempt ceiling.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Allocates with a `SmallRng` seeded from `seed`.
    pub fn allocate_seeded(
        &self,
        subjects: &[Subject],
        timetable: &mut Timetable,
        seed: u64,
    ) -> Result<AllocationReport> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.allocate(subjects, timetable, &mut rng)
    }

    /// Fills `timetable` in place.
    ///
    /// Expects grids sized for the request and free wherever subjects may
    /// go. Subject ids are positions in `subjects`.
    ///
    /// # Errors
    /// - `InvalidConfiguration` if the grid has no days or no periods while
    ///   some subject needs sessions.
    /// - `PlacementExhausted` for the first (section, subject) that could not
    ///   be completed. Grids keep the bookings made so far.
    pub fn allocate<R: Rng>(
        &self,
        subjects: &[Subject],
        timetable: &mut Timetable,
        rng: &mut R,
    ) -> Result<AllocationReport> {
        let mut report = AllocationReport::default();
        let demand: u64 = subjects.iter().map(|s| u64::from(s.sessions_per_week)).sum();
        if demand == 0 {
            return Ok(report);
        }
        if timetable.days() == 0 || timetable.periods() == 0 {
            return Err(TimetableError::InvalidConfiguration(format!(
                "cannot place {demand} sessions into a {}x{} grid",
                timetable.days(),
                timetable.periods()
            )));
        }

        let roster = FacultyRoster::from_subjects(subjects);

        for section in 0..timetable.section_count() {
            for (index, subject) in subjects.iter().enumerate() {
                let booking = Booking::new(SubjectId(index), roster.id_of(&subject.faculty));
                self.place_subject(section, subject, booking, timetable, rng, &mut report)?;
            }
        }

        debug!(
            "allocation done: {} placed, {} draws, {} rejected \
             (occupied {}, faculty {}, subject {}, excluded day {})",
            report.placed,
            report.draws,
            report.rejections.total(),
            report.rejections.occupied,
            report.rejections.faculty_clash,
            report.rejections.subject_clash,
            report.rejections.excluded_day,
        );
        Ok(report)
    }

    fn place_subject<R: Rng>(
        &self,
        section: usize,
        subject: &Subject,
        booking: Booking,
        timetable: &mut Timetable,
        rng: &mut R,
        report: &mut AllocationReport,
    ) -> Result<()> {
        let mut remaining = subject.sessions_per_week as usize;
        let mut attempts = 0;

        while remaining > 0 && attempts < self.max_attempts {
            let day = rng.random_range(0..timetable.days());
            let period = rng.random_range(0..timetable.periods());
            report.draws += 1;

            match check_slot(timetable, section, day, period, subject, &booking) {
                Some(rejection) => {
                    report.rejections.record(rejection);
                    attempts += 1;
                }
                None => {
                    let booked = timetable.book(section, day, period, booking);
                    debug_assert!(booked, "check_slot accepted a slot that cannot be booked");
                    trace!(
                        "booked '{}' in section {section} at day {day} period {period}",
                        subject.name
                    );
                    report.placed += 1;
                    remaining -= 1;
                    attempts = 0;
                }
            }
        }

        let section_name = timetable
            .section(section)
            .map(|s| s.name.clone())
            .unwrap_or_default();

        if remaining > 0 {
            warn!(
                "gave up on '{}' in {section_name}: {remaining} of {} sessions unplaced after {} attempts",
                subject.name, subject.sessions_per_week, self.max_attempts
            );
            return Err(TimetableError::PlacementExhausted {
                subject: subject.name.clone(),
                section: section_name,
                remaining,
            });
        }

        debug!(
            "placed {} sessions of '{}' in {section_name}",
            subject.sessions_per_week, subject.name
        );
        Ok(())
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the first reason a draw must be rejected, or `None` if the
/// booking may go into (section, day, period).
fn check_slot(
    timetable: &Timetable,
    section: usize,
    day: usize,
    period: usize,
    subject: &Subject,
    booking: &Booking,
) -> Option<Rejection> {
    if !timetable.is_free(section, day, period) {
        return Some(Rejection::Occupied);
    }
    if booking.faculty.is_some()
        && timetable
            .peers_at(section, day, period)
            .any(|peer| peer.shares_faculty(booking))
    {
        return Some(Rejection::FacultyClash);
    }
    if timetable
        .peers_at(section, day, period)
        .any(|peer| peer.subject == booking.subject)
    {
        return Some(Rejection::SubjectClash);
    }
    if subject.excludes_index(day) {
        return Some(Rejection::ExcludedDay);
    }
    None
}
