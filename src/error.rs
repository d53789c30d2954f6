//! Error taxonomy for timetable generation.
//!
//! Scheduling failures fall into two families:
//!
//! - **Static** (`CapacityExceeded`, `SubjectUnschedulable`): detected by the
//!   feasibility pre-check before any random draw. Deterministic for a given
//!   input.
//! - **Dynamic** (`PlacementExhausted`): the randomized allocator ran out of
//!   attempts. Probabilistic: the same input may succeed under another seed.
//!
//! All of them abort the whole run; there is no partial-result mode.

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

use crate::validation::ValidationError;

/// Why a single subject can never be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unschedulable {
    /// Excluded days cover every working day.
    NoAvailableDays,
    /// Demand exceeds the slots left on the subject's available days.
    InsufficientCapacity {
        /// Sessions per week requested.
        required: usize,
        /// Slots reachable on the available days across all sections.
        possible: usize,
    },
}

impl fmt::Display for Unschedulable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAvailableDays => write!(f, "has no available days due to constraints"),
            Self::InsufficientCapacity { required, possible } => {
                write!(f, "requires {required} periods/week but only {possible} possible")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Unknown day: '{0}'")]
    UnknownDay(String),

    #[error("Total required classes ({required}) exceed available slots ({available})")]
    CapacityExceeded { required: usize, available: usize },

    #[error("Subject '{subject}' {reason}")]
    SubjectUnschedulable {
        subject: String,
        reason: Unschedulable,
    },

    #[error(
        "Could not place all classes for '{subject}' in {section} ({remaining} remaining); try relaxing constraints"
    )]
    PlacementExhausted {
        subject: String,
        section: String,
        remaining: usize,
    },

    #[error("Failed to read file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TimetableError {
    /// Whether re-running with a fresh seed may succeed.
    ///
    /// Only the dynamic allocator failure qualifies; every other variant is
    /// a property of the input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PlacementExhausted { .. })
    }

    /// Whether the error was raised by the feasibility pre-check.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::SubjectUnschedulable { .. }
        )
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_capacity_message() {
        let err = TimetableError::CapacityExceeded {
            required: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "Total required classes (3) exceed available slots (2)"
        );
        assert!(err.is_infeasible());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unschedulable_messages() {
        let no_days = TimetableError::SubjectUnschedulable {
            subject: "Art".into(),
            reason: Unschedulable::NoAvailableDays,
        };
        assert_eq!(
            no_days.to_string(),
            "Subject 'Art' has no available days due to constraints"
        );

        let over = TimetableError::SubjectUnschedulable {
            subject: "Math".into(),
            reason: Unschedulable::InsufficientCapacity {
                required: 9,
                possible: 8,
            },
        };
        assert!(over.to_string().contains("requires 9 periods/week but only 8 possible"));
    }

    #[test]
    fn test_placement_exhausted_is_retryable() {
        let err = TimetableError::PlacementExhausted {
            subject: "Math".into(),
            section: "Section B".into(),
            remaining: 2,
        };
        assert!(err.is_retryable());
        assert!(!err.is_infeasible());
        assert!(err.to_string().contains("'Math' in Section B"));
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = TimetableError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyName, "first"),
            ValidationError::new(ValidationErrorKind::ZeroSessions, "second"),
        ]);
        assert_eq!(err.to_string(), "Invalid input: first; second");
    }
}
