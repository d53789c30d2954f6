//! Static feasibility pre-check.
//!
//! Rejects requests that can never be placed, before any random draw.
//! The allocator on its own would only notice such inputs after burning
//! through its attempt ceiling.
//!
//! # Checks (in order)
//!
//! 1. **Global capacity**: total demand fits in `days × periods × sections`.
//! 2. **Day availability**: each subject keeps at least one working day.
//! 3. **Subject capacity**: each subject's demand fits in
//!    `available_days × periods × sections`.
//!
//! Checks 2 and 3 run per subject in input order, so the first offending
//! subject is the one reported.
//!
//! Passing does not guarantee the allocator will succeed: clashes between
//! sections can still make a request unplaceable.

use log::debug;

use crate::config::TimetableConfig;
use crate::error::{Result, TimetableError, Unschedulable};
use crate::models::Subject;

/// Runs every feasibility check.
///
/// Pure: the same input always yields the same verdict.
pub fn check_feasibility(subjects: &[Subject], config: &TimetableConfig) -> Result<()> {
    let required: usize = subjects
        .iter()
        .map(|s| s.sessions_per_week as usize)
        .fold(0, usize::saturating_add);
    let available = config.total_slots();
    if required > available {
        return Err(TimetableError::CapacityExceeded {
            required,
            available,
        });
    }

    let per_day = config
        .periods_per_day
        .saturating_mul(config.section_count());
    for subject in subjects {
        let available_days = subject.available_days(config.working_days);
        if available_days < 1 {
            return Err(TimetableError::SubjectUnschedulable {
                subject: subject.name.clone(),
                reason: Unschedulable::NoAvailableDays,
            });
        }

        let possible = available_days.saturating_mul(per_day);
        let required = subject.sessions_per_week as usize;
        if required > possible {
            return Err(TimetableError::SubjectUnschedulable {
                subject: subject.name.clone(),
                reason: Unschedulable::InsufficientCapacity { required, possible },
            });
        }
    }

    debug!("feasibility ok: {required} of {available} slots requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_feasible() {
        let config = TimetableConfig::new(5, 4);
        let subjects = vec![
            Subject::new("Math", 4).with_faculty("A"),
            Subject::new("Physics", 3).excluding(Weekday::Monday),
        ];
        assert!(check_feasibility(&subjects, &config).is_ok());
    }

    #[test]
    fn test_global_capacity_exceeded() {
        // 3 > 1 × 1 × 2
        let config = TimetableConfig::new(1, 1);
        let subjects = vec![Subject::new("Math", 3).with_faculty("A")];
        let err = check_feasibility(&subjects, &config).unwrap_err();
        assert!(matches!(
            err,
            TimetableError::CapacityExceeded {
                required: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_global_capacity_exact_fit() {
        let config = TimetableConfig::new(1, 1);
        let subjects = vec![Subject::new("A", 1), Subject::new("B", 1)];
        assert!(check_feasibility(&subjects, &config).is_ok());
    }

    #[test]
    fn test_all_days_excluded() {
        let config = TimetableConfig::new(5, 4);
        let subjects = vec![
            Subject::new("Math", 2),
            Subject::new("Never", 1).excluding_days(Weekday::working_week(5).to_vec()),
        ];
        let err = check_feasibility(&subjects, &config).unwrap_err();
        match err {
            TimetableError::SubjectUnschedulable { subject, reason } => {
                assert_eq!(subject, "Never");
                assert_eq!(reason, Unschedulable::NoAvailableDays);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_subject_capacity_exceeded() {
        // 1 available day × 2 periods × 2 sections = 4 < 5
        let config = TimetableConfig::new(2, 2);
        let subjects = vec![Subject::new("Lab", 5).excluding(Weekday::Tuesday)];
        let err = check_feasibility(&subjects, &config).unwrap_err();
        match err {
            TimetableError::SubjectUnschedulable { subject, reason } => {
                assert_eq!(subject, "Lab");
                assert_eq!(
                    reason,
                    Unschedulable::InsufficientCapacity {
                        required: 5,
                        possible: 4
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_global_check_runs_first() {
        // Both global and per-subject checks fail; global is reported
        let config = TimetableConfig::new(1, 1);
        let subjects = vec![
            Subject::new("Never", 1).excluding(Weekday::Monday),
            Subject::new("Big", 5),
        ];
        let err = check_feasibility(&subjects, &config).unwrap_err();
        assert!(matches!(err, TimetableError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_verdict_is_idempotent() {
        let config = TimetableConfig::new(2, 2);
        let inputs = vec![
            vec![Subject::new("Ok", 3)],
            vec![Subject::new("Too much", 9)],
            vec![Subject::new("Off", 1).excluding_days([Weekday::Monday, Weekday::Tuesday])],
        ];
        for subjects in &inputs {
            let first = check_feasibility(subjects, &config).map_err(|e| e.to_string());
            let second = check_feasibility(subjects, &config).map_err(|e| e.to_string());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_empty_subjects() {
        assert!(check_feasibility(&[], &TimetableConfig::default()).is_ok());
    }
}
