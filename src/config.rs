//! Timetable configuration.
//!
//! Grid dimensions, section names and run limits. Every field has a
//! default, so a request file only needs to name what it changes.
//! Runtime overrides are read from the environment by [`EnvOverrides`].

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Result, TimetableError};

const ENV_SEED: &str = "U_TIMETABLE_SEED";
const ENV_MAX_ATTEMPTS: &str = "U_TIMETABLE_MAX_ATTEMPTS";

/// Default attempt ceiling per placement streak.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;
/// Default limit on the number of subjects.
pub const DEFAULT_MAX_SUBJECTS: usize = 5;

/// Shape of the weekly grid and limits of one scheduling pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Working days per week (1-7), counted from Monday.
    pub working_days: usize,
    /// Periods per working day.
    pub periods_per_day: usize,
    /// One grid is built per section name.
    pub section_names: Vec<String>,
    /// Upper bound on the number of subjects.
    pub max_subjects: usize,
    /// Consecutive rejected draws tolerated before a subject is given up.
    pub max_attempts: usize,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            working_days: 5,
            periods_per_day: 6,
            section_names: vec!["Section A".to_string(), "Section B".to_string()],
            max_subjects: DEFAULT_MAX_SUBJECTS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl TimetableConfig {
    /// Creates a configuration with the given grid and default sections.
    pub fn new(working_days: usize, periods_per_day: usize) -> Self {
        Self {
            working_days,
            periods_per_day,
            ..Self::default()
        }
    }

    /// Replaces the section names.
    pub fn with_sections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the subject limit.
    pub fn with_max_subjects(mut self, max_subjects: usize) -> Self {
        self.max_subjects = max_subjects;
        self
    }

    /// Sets the attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Number of sections.
    #[inline]
    pub fn section_count(&self) -> usize {
        self.section_names.len()
    }

    /// Slots per section (`working_days × periods_per_day`).
    pub fn slots_per_section(&self) -> usize {
        self.working_days.saturating_mul(self.periods_per_day)
    }

    /// Slots across all sections.
    pub fn total_slots(&self) -> usize {
        self.slots_per_section().saturating_mul(self.section_count())
    }

    /// Applies environment overrides on top of this configuration.
    pub fn apply(&mut self, overrides: &EnvOverrides) {
        if let Some(max_attempts) = overrides.max_attempts {
            self.max_attempts = max_attempts;
        }
    }
}

/// Settings taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Fixed random seed (`U_TIMETABLE_SEED`).
    pub seed: Option<u64>,
    /// Attempt ceiling (`U_TIMETABLE_MAX_ATTEMPTS`).
    pub max_attempts: Option<usize>,
}

impl EnvOverrides {
    /// Reads `U_TIMETABLE_SEED` and `U_TIMETABLE_MAX_ATTEMPTS`.
    ///
    /// Unset or blank variables are ignored. A value that does not parse,
    /// or a zero attempt ceiling, is an `InvalidConfiguration` error.
    pub fn from_env() -> Result<Self> {
        let mut overrides = Self::default();

        if let Some(raw) = read_var(ENV_SEED) {
            let seed = raw.parse::<u64>().map_err(|_| {
                TimetableError::InvalidConfiguration(format!("{ENV_SEED} is not a u64: {raw}"))
            })?;
            overrides.seed = Some(seed);
        }

        if let Some(raw) = read_var(ENV_MAX_ATTEMPTS) {
            let max_attempts = raw.parse::<usize>().ok().filter(|&n| n > 0).ok_or_else(|| {
                TimetableError::InvalidConfiguration(format!(
                    "{ENV_MAX_ATTEMPTS} must be a positive integer: {raw}"
                ))
            })?;
            overrides.max_attempts = Some(max_attempts);
        }

        Ok(overrides)
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimetableConfig::default();
        assert_eq!(config.working_days, 5);
        assert_eq!(config.section_count(), 2);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.total_slots(), 5 * 6 * 2);
    }

    #[test]
    fn test_builder() {
        let config = TimetableConfig::new(3, 4)
            .with_sections(["X", "Y", "Z"])
            .with_max_subjects(8)
            .with_max_attempts(50);
        assert_eq!(config.slots_per_section(), 12);
        assert_eq!(config.total_slots(), 36);
        assert_eq!(config.max_subjects, 8);
        assert_eq!(config.max_attempts, 50);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: TimetableConfig =
            serde_json::from_str(r#"{"working_days": 6, "section_names": ["Only"]}"#).unwrap();
        assert_eq!(config.working_days, 6);
        assert_eq!(config.periods_per_day, 6);
        assert_eq!(config.section_names, vec!["Only".to_string()]);
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = TimetableConfig::default();
        config.apply(&EnvOverrides::default());
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);

        config.apply(&EnvOverrides {
            seed: Some(1),
            max_attempts: Some(25),
        });
        assert_eq!(config.max_attempts, 25);
    }

    // Environment mutation is process-wide; keep every env assertion in one test.
    #[test]
    fn test_from_env() {
        let orig_seed = env::var(ENV_SEED).ok();
        let orig_attempts = env::var(ENV_MAX_ATTEMPTS).ok();

        env::remove_var(ENV_SEED);
        env::remove_var(ENV_MAX_ATTEMPTS);
        assert_eq!(EnvOverrides::from_env().unwrap(), EnvOverrides::default());

        env::set_var(ENV_SEED, " 42 ");
        env::set_var(ENV_MAX_ATTEMPTS, "500");
        let overrides = EnvOverrides::from_env().unwrap();
        assert_eq!(overrides.seed, Some(42));
        assert_eq!(overrides.max_attempts, Some(500));

        env::set_var(ENV_MAX_ATTEMPTS, "0");
        assert!(EnvOverrides::from_env().is_err());

        env::set_var(ENV_MAX_ATTEMPTS, "   ");
        env::set_var(ENV_SEED, "not-a-number");
        assert!(matches!(
            EnvOverrides::from_env(),
            Err(TimetableError::InvalidConfiguration(_))
        ));

        env::remove_var(ENV_SEED);
        env::remove_var(ENV_MAX_ATTEMPTS);
        if let Some(value) = orig_seed {
            env::set_var(ENV_SEED, value);
        }
        if let Some(value) = orig_attempts {
            env::set_var(ENV_MAX_ATTEMPTS, value);
        }
    }
}
