//! Academic period model.
//!
//! An academic period is a contiguous, inclusive date range belonging to one
//! semester: teaching weeks, an exam session, a practice stage. A semester is
//! usually several periods separated by gaps (breaks, holidays).
//!
//! # Wire Format
//! Dates are `YYYY-MM-DD`. `target` is `"terminal"`, `"neterminal"`, empty or
//! null; empty and null both mean the period applies to every student.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Which students a period applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PeriodTarget {
    /// Final-year students only.
    Terminal,
    /// Every year except the final one.
    NonTerminal,
    /// A scope label this crate does not know.
    Other(String),
}

impl PeriodTarget {
    /// Whether a student in the given year kind falls under this scope.
    pub fn applies_to(&self, is_terminal: bool) -> bool {
        match self {
            PeriodTarget::Terminal => is_terminal,
            PeriodTarget::NonTerminal => !is_terminal,
            PeriodTarget::Other(_) => false,
        }
    }
}

impl From<String> for PeriodTarget {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "terminal" => PeriodTarget::Terminal,
            "neterminal" | "non-terminal" | "nonterminal" => PeriodTarget::NonTerminal,
            _ => PeriodTarget::Other(s),
        }
    }
}

impl From<PeriodTarget> for String {
    fn from(target: PeriodTarget) -> Self {
        target.to_string()
    }
}

impl fmt::Display for PeriodTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodTarget::Terminal => f.write_str("terminal"),
            PeriodTarget::NonTerminal => f.write_str("neterminal"),
            PeriodTarget::Other(s) => f.write_str(s),
        }
    }
}

/// A contiguous date range of one semester.
///
/// Both ends are inclusive. `start_date <= end_date` is expected; an
/// inverted period simply contains no dates (see
/// [`validate_schedule`](crate::validation::validate_schedule)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    /// Period identifier.
    pub id: String,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Free-text kind, e.g. "activitate didactică" or "sesiune".
    #[serde(default)]
    pub period_type: String,
    /// Semester number (1 or 2).
    pub semester: u8,
    /// Student scope. `None` = everyone.
    #[serde(default, deserialize_with = "deserialize_target")]
    pub target: Option<PeriodTarget>,
}

impl AcademicPeriod {
    /// Creates an unscoped period.
    pub fn new(
        id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        semester: u8,
    ) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
            period_type: String::new(),
            semester,
            target: None,
        }
    }

    /// Sets the period kind.
    pub fn with_type(mut self, period_type: impl Into<String>) -> Self {
        self.period_type = period_type.into();
        self
    }

    /// Sets the student scope.
    pub fn with_target(mut self, target: PeriodTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Whether `date` lies within `[start_date, end_date]`.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days covered (0 for an inverted period).
    pub fn day_count(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

fn deserialize_target<'de, D>(deserializer: D) -> Result<Option<PeriodTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .map(PeriodTarget::from))
}
