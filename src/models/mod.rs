//! Timetabling domain models.
//!
//! Provides the data types for a weekly timetabling problem and its
//! solution: subjects with their demand and constraints, and the
//! per-section (day, period) grids they are placed into.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | University | Training Center |
//! |-------------|--------|------------|-----------------|
//! | Subject | Subject | Course | Module |
//! | Faculty | Teacher | Lecturer | Trainer |
//! | Section | Class Division | Cohort | Batch |
//! | Slot | Period | Lecture Slot | Session |

mod day;
mod faculty;
mod grid;
mod subject;
mod timetable;

pub use day::Weekday;
pub use faculty::{Faculty, FacultyId, FacultyRoster, UNASSIGNED};
pub use grid::{Booking, SectionGrid, Slot};
pub use subject::{Subject, SubjectId};
pub use timetable::{Timetable, Violation, ViolationType};
