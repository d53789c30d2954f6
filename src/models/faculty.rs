//! Faculty model and roster.
//!
//! A subject is either taught by a named faculty member, who can only be in
//! one section at a time, or is `Unassigned` and never clashes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text form of the unassigned sentinel.
pub const UNASSIGNED: &str = "Unassigned";

/// Faculty responsible for a subject.
///
/// Serialized as an optional string: `null`, `""` and `"Unassigned"`
/// (any case) all map to [`Faculty::Unassigned`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Faculty {
    /// No faculty constraint; always available.
    #[default]
    Unassigned,
    /// A named faculty member.
    Named(String),
}

impl Faculty {
    /// Creates a faculty from a name, recognizing the sentinel text.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNASSIGNED) {
            Faculty::Unassigned
        } else {
            Faculty::Named(trimmed.to_string())
        }
    }

    /// Whether this is the unassigned sentinel.
    #[inline]
    pub fn is_unassigned(&self) -> bool {
        matches!(self, Faculty::Unassigned)
    }

    /// Display name (`"Unassigned"` for the sentinel).
    pub fn name(&self) -> &str {
        match self {
            Faculty::Unassigned => UNASSIGNED,
            Faculty::Named(name) => name,
        }
    }

    /// First character of the display name, used in slot labels.
    pub fn initial(&self) -> char {
        self.name().chars().next().unwrap_or('?')
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Option<String>> for Faculty {
    fn from(value: Option<String>) -> Self {
        value.map(Faculty::new).unwrap_or_default()
    }
}

impl From<Faculty> for Option<String> {
    fn from(faculty: Faculty) -> Self {
        match faculty {
            Faculty::Unassigned => None,
            Faculty::Named(name) => Some(name),
        }
    }
}

impl From<&str> for Faculty {
    fn from(value: &str) -> Self {
        Faculty::new(value)
    }
}

/// Index of a named faculty within a [`FacultyRoster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacultyId(pub usize);

/// Interned list of the distinct named faculties of a subject list.
///
/// Ids are issued in first-appearance order. The unassigned sentinel is
/// never interned, so it has no id and cannot clash.
#[derive(Debug, Clone, Default)]
pub struct FacultyRoster {
    names: Vec<String>,
}

impl FacultyRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from the faculties of the given subjects.
    pub fn from_subjects(subjects: &[super::Subject]) -> Self {
        let mut roster = Self::new();
        for subject in subjects {
            roster.intern(&subject.faculty);
        }
        roster
    }

    /// Registers a faculty, returning its id (`None` for the sentinel).
    pub fn intern(&mut self, faculty: &Faculty) -> Option<FacultyId> {
        match faculty {
            Faculty::Unassigned => None,
            Faculty::Named(name) => Some(match self.position(name) {
                Some(id) => id,
                None => {
                    self.names.push(name.clone());
                    FacultyId(self.names.len() - 1)
                }
            }),
        }
    }

    /// Looks up the id of an already-registered faculty.
    pub fn id_of(&self, faculty: &Faculty) -> Option<FacultyId> {
        match faculty {
            Faculty::Unassigned => None,
            Faculty::Named(name) => self.position(name),
        }
    }

    /// Name for an id.
    pub fn name(&self, id: FacultyId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Number of distinct named faculties.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no named faculty is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn position(&self, name: &str) -> Option<FacultyId> {
        self.names.iter().position(|n| n == name).map(FacultyId)
    }
}
