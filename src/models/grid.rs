//! Section grid model.
//!
//! A section grid is a `days × periods` matrix of slots. Each slot is
//! either free or holds exactly one booking.

use serde::{Deserialize, Serialize};

use super::{FacultyId, Subject, SubjectId};

/// An assignment record: which subject, taught by which faculty.
///
/// Clash checks compare these ids by equality. A booking of an unassigned
/// subject carries `faculty: None` and never clashes on faculty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Booking {
    /// Booked subject.
    pub subject: SubjectId,
    /// Teaching faculty (`None` = unassigned).
    pub faculty: Option<FacultyId>,
}

impl Booking {
    /// Creates a booking.
    pub fn new(subject: SubjectId, faculty: Option<FacultyId>) -> Self {
        Self { subject, faculty }
    }

    /// Whether both bookings need the same named faculty.
    #[inline]
    pub fn shares_faculty(&self, other: &Booking) -> bool {
        self.faculty.is_some() && self.faculty == other.faculty
    }

    /// Label such as `"Math(A)"`, resolved against the subject list.
    pub fn label(&self, subjects: &[Subject]) -> String {
        subjects
            .get(self.subject.0)
            .map(Subject::label)
            .unwrap_or_else(|| format!("#{}", self.subject.0))
    }
}

/// Contents of one (day, period) cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Nothing scheduled.
    #[default]
    Free,
    /// A booked session.
    Booked(Booking),
}

impl Slot {
    /// Whether the slot is free.
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, Slot::Free)
    }

    /// The booking, if any.
    #[inline]
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            Slot::Free => None,
            Slot::Booked(b) => Some(b),
        }
    }
}

/// One section's weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGrid {
    /// Section name (e.g. "Section A").
    pub name: String,
    /// Slots indexed `[day][period]`.
    slots: Vec<Vec<Slot>>,
}

impl SectionGrid {
    /// Creates a grid with every slot free.
    pub fn new(name: impl Into<String>, days: usize, periods: usize) -> Self {
        Self {
            name: name.into(),
            slots: vec![vec![Slot::Free; periods]; days],
        }
    }

    /// Number of days.
    pub fn days(&self) -> usize {
        self.slots.len()
    }

    /// Number of periods per day.
    pub fn periods(&self) -> usize {
        self.slots.first().map_or(0, Vec::len)
    }

    /// Slot at (day, period), or `None` when out of range.
    pub fn slot(&self, day: usize, period: usize) -> Option<&Slot> {
        self.slots.get(day).and_then(|row| row.get(period))
    }

    /// Booking at (day, period), if any.
    pub fn booking_at(&self, day: usize, period: usize) -> Option<&Booking> {
        self.slot(day, period).and_then(Slot::booking)
    }

    /// Whether (day, period) exists and is free.
    pub fn is_free(&self, day: usize, period: usize) -> bool {
        self.slot(day, period).is_some_and(Slot::is_free)
    }

    /// Writes a booking into a free slot.
    ///
    /// Returns `false` (and leaves the grid unchanged) when the slot is out
    /// of range or already booked.
    pub fn book(&mut self, day: usize, period: usize, booking: Booking) -> bool {
        match self.slots.get_mut(day).and_then(|row| row.get_mut(period)) {
            Some(slot) if slot.is_free() => {
                *slot = Slot::Booked(booking);
                true
            }
            _ => false,
        }
    }

    /// Periods of one day.
    pub fn day(&self, day: usize) -> &[Slot] {
        self.slots.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(day, period, booking)` over booked slots.
    pub fn bookings(&self) -> impl Iterator<Item = (usize, usize, &Booking)> {
        self.slots.iter().enumerate().flat_map(|(d, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(p, slot)| slot.booking().map(|b| (d, p, b)))
        })
    }

    /// Number of booked slots.
    pub fn booked_count(&self) -> usize {
        self.bookings().count()
    }

    /// Number of sessions booked for a subject.
    pub fn sessions_of(&self, subject: SubjectId) -> usize {
        self.bookings().filter(|(_, _, b)| b.subject == subject).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(subject: usize, faculty: Option<usize>) -> Booking {
        Booking::new(SubjectId(subject), faculty.map(FacultyId))
    }

    #[test]
    fn test_new_grid_is_free() {
        let g = SectionGrid::new("Section A", 5, 4);
        assert_eq!(g.days(), 5);
        assert_eq!(g.periods(), 4);
        assert_eq!(g.booked_count(), 0);
        assert!(g.is_free(4, 3));
        assert!(!g.is_free(5, 0)); // out of range
    }

    #[test]
    fn test_book_once() {
        let mut g = SectionGrid::new("A", 2, 2);
        assert!(g.book(1, 0, booking(0, Some(0))));
        assert!(!g.book(1, 0, booking(1, None)));
        assert!(!g.book(9, 9, booking(1, None)));
        assert_eq!(g.booking_at(1, 0), Some(&booking(0, Some(0))));
        assert_eq!(g.booked_count(), 1);
        assert_eq!(g.sessions_of(SubjectId(0)), 1);
        assert_eq!(g.sessions_of(SubjectId(1)), 0);
    }

    #[test]
    fn test_shares_faculty() {
        assert!(booking(0, Some(1)).shares_faculty(&booking(2, Some(1))));
        assert!(!booking(0, Some(1)).shares_faculty(&booking(2, Some(2))));
        // Unassigned never clashes, even with another unassigned booking
        assert!(!booking(0, None).shares_faculty(&booking(1, None)));
    }

    #[test]
    fn test_label_resolution() {
        let subjects = vec![Subject::new("Math", 2).with_faculty("Alice")];
        assert_eq!(booking(0, Some(0)).label(&subjects), "Math(A)");
        assert_eq!(booking(7, None).label(&subjects), "#7");
    }

    #[test]
    fn test_bookings_iteration_order() {
        let mut g = SectionGrid::new("A", 2, 3);
        g.book(1, 2, booking(1, None));
        g.book(0, 1, booking(0, None));
        let coords: Vec<(usize, usize)> = g.bookings().map(|(d, p, _)| (d, p)).collect();
        assert_eq!(coords, vec![(0, 1), (1, 2)]);
    }
}
