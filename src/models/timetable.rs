//! Timetable (solution) model.
//!
//! A timetable owns every section grid of one scheduling pass. Sections are
//! peers: the same faculty or subject may not appear at the same
//! (day, period) in two of them. Keeping all grids in one value lets the
//! allocator read every peer while writing one section, without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Booking, SectionGrid, Subject, SubjectId, Weekday};

/// All section grids of a scheduling pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    days: usize,
    periods: usize,
    sections: Vec<SectionGrid>,
}

/// A hard-constraint violation found in a finished timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity (subject or faculty name).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// One faculty booked in two sections at the same slot.
    FacultyClash,
    /// One subject booked in two sections at the same slot.
    SubjectClash,
    /// Subject booked on one of its excluded days.
    ExcludedDay,
    /// Placed sessions differ from `sessions_per_week` in a section.
    SessionCountMismatch,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
        severity: i32,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }
}

impl Timetable {
    /// Creates a timetable with one all-free grid per section name.
    pub fn new<I, S>(days: usize, periods: usize, section_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days,
            periods,
            sections: section_names
                .into_iter()
                .map(|name| SectionGrid::new(name, days, periods))
                .collect(),
        }
    }

    /// Number of working days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Periods per day.
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// All section grids.
    pub fn sections(&self) -> &[SectionGrid] {
        &self.sections
    }

    /// One section grid.
    pub fn section(&self, index: usize) -> Option<&SectionGrid> {
        self.sections.get(index)
    }

    /// Slots across all sections.
    pub fn total_slots(&self) -> usize {
        self.days * self.periods * self.sections.len()
    }

    /// Booked slots across all sections.
    pub fn booked_count(&self) -> usize {
        self.sections.iter().map(SectionGrid::booked_count).sum()
    }

    /// Whether the slot exists in `section` and is free.
    pub fn is_free(&self, section: usize, day: usize, period: usize) -> bool {
        self.sections
            .get(section)
            .is_some_and(|s| s.is_free(day, period))
    }

    /// Writes a booking into a free slot of `section`.
    pub fn book(&mut self, section: usize, day: usize, period: usize, booking: Booking) -> bool {
        self.sections
            .get_mut(section)
            .is_some_and(|s| s.book(day, period, booking))
    }

    /// Bookings at (day, period) in every section except `section`.
    pub fn peers_at(
        &self,
        section: usize,
        day: usize,
        period: usize,
    ) -> impl Iterator<Item = &Booking> {
        self.sections
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != section)
            .filter_map(move |(_, s)| s.booking_at(day, period))
    }

    /// Sessions of a subject summed over all sections.
    pub fn sessions_of(&self, subject: SubjectId) -> usize {
        self.sections.iter().map(|s| s.sessions_of(subject)).sum()
    }

    /// Checks every hard constraint and returns all violations.
    ///
    /// Checks:
    /// 1. No faculty appears twice at one (day, period) across sections
    /// 2. No subject appears twice at one (day, period) across sections
    /// 3. No subject is booked on an excluded day
    /// 4. Each section holds exactly `sessions_per_week` of every subject
    pub fn violations(&self, subjects: &[Subject]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let name_of = |id: SubjectId| {
            subjects
                .get(id.0)
                .map_or_else(|| format!("#{}", id.0), |s| s.name.clone())
        };

        for day in 0..self.days {
            let day_name = Weekday::from_index(day).map_or("?", Weekday::name);
            for period in 0..self.periods {
                let here: Vec<&Booking> = self
                    .sections
                    .iter()
                    .filter_map(|s| s.booking_at(day, period))
                    .collect();

                for (i, a) in here.iter().enumerate() {
                    for b in &here[i + 1..] {
                        if a.shares_faculty(b) {
                            let faculty = subjects
                                .get(a.subject.0)
                                .map_or("?", |s| s.faculty.name());
                            violations.push(Violation::new(
                                ViolationType::FacultyClash,
                                faculty,
                                format!(
                                    "Faculty '{faculty}' booked twice on {day_name} period {}",
                                    period + 1
                                ),
                                100,
                            ));
                        }
                        if a.subject == b.subject {
                            let subject = name_of(a.subject);
                            violations.push(Violation::new(
                                ViolationType::SubjectClash,
                                subject.clone(),
                                format!(
                                    "Subject '{subject}' taught in two sections on {day_name} period {}",
                                    period + 1
                                ),
                                100,
                            ));
                        }
                    }
                }
            }
        }

        for section in &self.sections {
            for (day, period, booking) in section.bookings() {
                if let Some(subject) = subjects.get(booking.subject.0) {
                    if subject.excludes_index(day) {
                        violations.push(Violation::new(
                            ViolationType::ExcludedDay,
                            subject.name.clone(),
                            format!(
                                "Subject '{}' booked on excluded day {} (period {}) in {}",
                                subject.name,
                                Weekday::from_index(day).map_or("?", Weekday::name),
                                period + 1,
                                section.name
                            ),
                            90,
                        ));
                    }
                }
            }

            let mut counts: HashMap<SubjectId, usize> = HashMap::new();
            for (_, _, booking) in section.bookings() {
                *counts.entry(booking.subject).or_insert(0) += 1;
            }
            for (i, subject) in subjects.iter().enumerate() {
                let placed = counts.get(&SubjectId(i)).copied().unwrap_or(0);
                let required = subject.sessions_per_week as usize;
                if placed != required {
                    violations.push(Violation::new(
                        ViolationType::SessionCountMismatch,
                        subject.name.clone(),
                        format!(
                            "Subject '{}' has {placed} of {required} sessions in {}",
                            subject.name, section.name
                        ),
                        80,
                    ));
                }
            }
        }

        violations
    }

    /// Whether the timetable satisfies every hard constraint.
    pub fn is_valid(&self, subjects: &[Subject]) -> bool {
        self.violations(subjects).is_empty()
    }
}
