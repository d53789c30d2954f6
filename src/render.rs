//! Timetable rendering.
//!
//! Two views of a finished timetable: a plain-text listing for terminals
//! and a label grid that serializes cleanly to JSON.

use serde::Serialize;
use std::fmt::Write;

use crate::models::{Slot, Subject, Timetable, Weekday};

/// Text shown for an empty slot.
pub const FREE_LABEL: &str = "Free";

/// Serializable view of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Section name.
    pub name: String,
    /// One entry per working day, Monday first.
    pub days: Vec<DayView>,
}

/// Serializable view of one day; `None` marks a free period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    /// The weekday.
    pub day: Weekday,
    /// Slot labels in period order.
    pub periods: Vec<Option<String>>,
}

/// Label grids for every section.
pub fn section_views(timetable: &Timetable, subjects: &[Subject]) -> Vec<SectionView> {
    timetable
        .sections()
        .iter()
        .map(|section| SectionView {
            name: section.name.clone(),
            days: Weekday::working_week(timetable.days())
                .iter()
                .map(|&day| DayView {
                    day,
                    periods: section
                        .day(day.index())
                        .iter()
                        .map(|slot| slot.booking().map(|b| b.label(subjects)))
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// Renders every section as an indented listing.
///
/// ```text
/// Section: Section A
/// Monday:
///   Period 1: Math(A)
///   Period 2: Free
/// ```
pub fn render_text(timetable: &Timetable, subjects: &[Subject]) -> String {
    let mut out = String::new();
    for section in timetable.sections() {
        let _ = writeln!(out, "Section: {}", section.name);
        for &day in Weekday::working_week(timetable.days()) {
            let _ = writeln!(out, "{day}:");
            for (period, slot) in section.day(day.index()).iter().enumerate() {
                let label = match slot {
                    Slot::Free => FREE_LABEL.to_string(),
                    Slot::Booked(b) => b.label(subjects),
                };
                let _ = writeln!(out, "  Period {}: {label}", period + 1);
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Booking, FacultyId, SubjectId};

    fn sample() -> (Timetable, Vec<Subject>) {
        let subjects = vec![Subject::new("Math", 1).with_faculty("Alice")];
        let mut t = Timetable::new(2, 2, ["Section A"]);
        t.book(0, 1, 0, Booking::new(SubjectId(0), Some(FacultyId(0))));
        (t, subjects)
    }

    #[test]
    fn test_render_text() {
        let (t, subjects) = sample();
        let text = render_text(&t, &subjects);
        let expected = "\
Section: Section A
Monday:
  Period 1: Free
  Period 2: Free

Tuesday:
  Period 1: Math(A)
  Period 2: Free

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_section_views() {
        let (t, subjects) = sample();
        let views = section_views(&t, &subjects);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].days.len(), 2);
        assert_eq!(views[0].days[1].day, Weekday::Tuesday);
        assert_eq!(
            views[0].days[1].periods,
            vec![Some("Math(A)".to_string()), None]
        );

        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["days"][0]["day"], "monday");
        assert!(json[0]["days"][0]["periods"][0].is_null());
    }
}
