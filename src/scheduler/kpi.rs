//! Timetable quality metrics (KPIs).
//!
//! Summarizes how full a finished timetable is.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilization | Booked slots / total slots |
//! | Section Utilization | Booked / total, per section |
//! | Free Slots | Total slots not booked |
//! | Sessions by Subject | Bookings per subject across all sections |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Subject, SubjectId, Timetable};

/// Timetable occupancy indicators.
#[derive(Debug, Clone, Serialize)]
pub struct TimetableKpi {
    /// Slots across all sections.
    pub total_slots: usize,
    /// Booked slots across all sections.
    pub booked_slots: usize,
    /// Slots left free.
    pub free_slots: usize,
    /// Fraction of slots booked (0.0..1.0).
    pub utilization: f64,
    /// Per-section utilization, keyed by section name.
    pub utilization_by_section: HashMap<String, f64>,
    /// Sessions placed per subject name, summed over sections.
    pub sessions_by_subject: HashMap<String, usize>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its subjects.
    pub fn calculate(timetable: &Timetable, subjects: &[Subject]) -> Self {
        let total_slots = timetable.total_slots();
        let booked_slots = timetable.booked_count();
        let per_section = timetable.days() * timetable.periods();

        let utilization_by_section = timetable
            .sections()
            .iter()
            .map(|s| (s.name.clone(), ratio(s.booked_count(), per_section)))
            .collect();

        let sessions_by_subject = subjects
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), timetable.sessions_of(SubjectId(i))))
            .collect();

        Self {
            total_slots,
            booked_slots,
            free_slots: total_slots - booked_slots,
            utilization: ratio(booked_slots, total_slots),
            utilization_by_section,
            sessions_by_subject,
        }
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
