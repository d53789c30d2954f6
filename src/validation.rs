//! Input validation for timetabling requests.
//!
//! Checks structural integrity of the configuration and subject list
//! before any scheduling work. Detects:
//! - Grid dimensions out of range
//! - Missing or duplicate sections
//! - Too many, unnamed or duplicate subjects
//! - Subjects with no demand
//! - Excluded days outside the working week
//!
//! Capacity questions are left to [`crate::feasibility`].

use crate::config::TimetableConfig;
use crate::models::{Subject, Weekday};
use std::collections::HashSet;

/// Maximum number of working days in a week.
pub const MAX_WORKING_DAYS: usize = 7;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Working days, periods or attempt ceiling out of range.
    InvalidDimension,
    /// No section configured.
    NoSections,
    /// Two sections share a name.
    DuplicateSection,
    /// More subjects than `max_subjects`.
    TooManySubjects,
    /// A subject has a blank name.
    EmptyName,
    /// Two subjects share a name.
    DuplicateName,
    /// A subject requests zero sessions.
    ZeroSessions,
    /// An excluded day is not a working day.
    ExcludedDayOutOfRange,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a configuration and its subjects.
///
/// Checks:
/// 1. `working_days` in 1..=7, `periods_per_day` ≥ 1, `max_attempts` ≥ 1
/// 2. At least one section, no duplicate section names
/// 3. No more than `max_subjects` subjects
/// 4. Subject names non-blank and unique
/// 5. `sessions_per_week` ≥ 1
/// 6. Every excluded day is a working day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(config: &TimetableConfig, subjects: &[Subject]) -> ValidationResult {
    let mut errors = Vec::new();

    if !(1..=MAX_WORKING_DAYS).contains(&config.working_days) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDimension,
            format!(
                "Working days must be between 1 and {MAX_WORKING_DAYS}, got {}",
                config.working_days
            ),
        ));
    }
    if config.periods_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDimension,
            "Periods per day must be at least 1",
        ));
    }
    if config.max_attempts == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDimension,
            "Attempt ceiling must be at least 1",
        ));
    }

    if config.section_names.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSections,
            "At least one section is required",
        ));
    }
    let mut section_names = HashSet::new();
    for name in &config.section_names {
        if !section_names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSection,
                format!("Duplicate section name: {name}"),
            ));
        }
    }

    if subjects.len() > config.max_subjects {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManySubjects,
            format!(
                "{} subjects given but at most {} are allowed",
                subjects.len(),
                config.max_subjects
            ),
        ));
    }

    let mut subject_names = HashSet::new();
    for (i, subject) in subjects.iter().enumerate() {
        if subject.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Subject #{} has an empty name", i + 1),
            ));
        } else if !subject_names.insert(subject.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate subject name: {}", subject.name),
            ));
        }

        if subject.sessions_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroSessions,
                format!("Subject '{}' requests no sessions", subject.name),
            ));
        }

        let outside: Vec<&str> = subject
            .excluded_days
            .iter()
            .filter(|d| !d.is_working(config.working_days))
            .map(|d| Weekday::name(*d))
            .collect();
        if !outside.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExcludedDayOutOfRange,
                format!(
                    "Subject '{}' excludes non-working day(s): {}",
                    subject.name,
                    outside.join(", ")
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_subjects() -> Vec<Subject> {
        vec![
            Subject::new("Math", 4).with_faculty("Alice"),
            Subject::new("Physics", 3)
                .with_faculty("Bob")
                .excluding(Weekday::Friday),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let config = TimetableConfig::new(5, 4);
        assert!(validate_request(&config, &sample_subjects()).is_ok());
    }

    #[test]
    fn test_empty_subject_list_is_valid() {
        let config = TimetableConfig::default();
        assert!(validate_request(&config, &[]).is_ok());
    }

    #[test]
    fn test_invalid_dimensions() {
        let config = TimetableConfig::new(8, 0).with_max_attempts(0);
        let errors = validate_request(&config, &[]).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidDimension)
                .count(),
            3
        );

        let config = TimetableConfig::new(0, 4);
        assert!(validate_request(&config, &[]).is_err());
    }

    #[test]
    fn test_sections() {
        let config = TimetableConfig::new(5, 4).with_sections(Vec::<String>::new());
        let errors = validate_request(&config, &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NoSections));

        let config = TimetableConfig::new(5, 4).with_sections(["A", "B", "A"]);
        let errors = validate_request(&config, &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateSection));
    }

    #[test]
    fn test_too_many_subjects() {
        let config = TimetableConfig::new(5, 4).with_max_subjects(1);
        let errors = validate_request(&config, &sample_subjects()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::TooManySubjects));
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let subjects = vec![
            Subject::new("Math", 1),
            Subject::new("Math", 2),
            Subject::new("  ", 1),
        ];
        let errors = validate_request(&TimetableConfig::default(), &subjects).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateName));
        assert!(has_kind(&errors, ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let subjects = vec![Subject::new("math", 1), Subject::new("Math", 1)];
        assert!(validate_request(&TimetableConfig::default(), &subjects).is_ok());
    }

    #[test]
    fn test_zero_sessions() {
        let subjects = vec![Subject::new("Idle", 0)];
        let errors = validate_request(&TimetableConfig::default(), &subjects).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::ZeroSessions));
    }

    #[test]
    fn test_excluded_day_out_of_range() {
        let subjects = vec![Subject::new("Chess", 1).excluding(Weekday::Saturday)];
        let errors = validate_request(&TimetableConfig::new(5, 4), &subjects).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::ExcludedDayOutOfRange));
        assert!(errors[0].message.contains("Saturday"));

        // Saturday is a working day in a 6-day week
        assert!(validate_request(&TimetableConfig::new(6, 4), &subjects).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let subjects = vec![Subject::new("", 0)];
        let config = TimetableConfig::new(9, 4);
        let errors = validate_request(&config, &subjects).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
