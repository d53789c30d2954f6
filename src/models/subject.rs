//! Subject model.
//!
//! A subject is the unit of demand: it needs `sessions_per_week` slots in
//! every section, taught by one faculty, never on its excluded days.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Faculty, Weekday};

/// A subject to be placed into every section's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject name.
    pub name: String,
    /// Sessions required per week, per section.
    pub sessions_per_week: u32,
    /// Days on which the subject may never be scheduled.
    #[serde(default)]
    pub excluded_days: BTreeSet<Weekday>,
    /// Teaching faculty.
    #[serde(default)]
    pub faculty: Faculty,
}

/// Position of a subject in the input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(pub usize);

impl Subject {
    /// Creates an unassigned subject with no excluded days.
    pub fn new(name: impl Into<String>, sessions_per_week: u32) -> Self {
        Self {
            name: name.into(),
            sessions_per_week,
            excluded_days: BTreeSet::new(),
            faculty: Faculty::Unassigned,
        }
    }

    /// Sets the faculty by name.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = Faculty::new(faculty);
        self
    }

    /// Excludes a day.
    pub fn excluding(mut self, day: Weekday) -> Self {
        self.excluded_days.insert(day);
        self
    }

    /// Excludes several days.
    pub fn excluding_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.excluded_days.extend(days);
        self
    }

    /// Whether the subject may not be scheduled on `day`.
    #[inline]
    pub fn excludes(&self, day: Weekday) -> bool {
        self.excluded_days.contains(&day)
    }

    /// Same as [`excludes`](Self::excludes), for a zero-based grid day index.
    pub fn excludes_index(&self, day_index: usize) -> bool {
        self.excluded_days.iter().any(|d| d.index() == day_index)
    }

    /// Working days left after exclusions.
    ///
    /// Only exclusions that fall inside the working week are subtracted.
    pub fn available_days(&self, working_days: usize) -> usize {
        let excluded = self
            .excluded_days
            .iter()
            .filter(|d| d.is_working(working_days))
            .count();
        working_days.saturating_sub(excluded)
    }

    /// Label written into a slot, e.g. `"Math(A)"`.
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.faculty.initial())
    }
}
