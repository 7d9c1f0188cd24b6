//! Academic schedule snapshot.
//!
//! The data layer fetches this once per calendar session. The engine reads
//! it on every query and never caches anything derived from it.

use serde::{Deserialize, Serialize};

use super::{AcademicPeriod, Holiday};

/// Periods and holidays in effect for one student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicSchedule {
    /// Academic periods of the current semester.
    #[serde(rename = "academic_periods", alias = "periods", default)]
    pub periods: Vec<AcademicPeriod>,
    /// Non-teaching dates.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Semester the periods belong to (1 or 2).
    #[serde(default = "default_semester")]
    pub current_semester: u8,
    /// Whether the student is in the final study year.
    #[serde(default)]
    pub is_terminal: bool,
}

fn default_semester() -> u8 {
    1
}

impl AcademicSchedule {
    /// Creates a semester-1, non-terminal snapshot.
    pub fn new(periods: Vec<AcademicPeriod>, holidays: Vec<Holiday>) -> Self {
        Self {
            periods,
            holidays,
            current_semester: 1,
            is_terminal: false,
        }
    }

    /// Sets the current semester.
    pub fn with_semester(mut self, semester: u8) -> Self {
        self.current_semester = semester;
        self
    }

    /// Marks the student as final-year.
    pub fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    /// Whether there are no periods (nothing can ever be scheduled).
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
