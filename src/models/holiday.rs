//! Non-teaching calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single non-teaching date, independent of academic periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Holiday identifier.
    pub id: String,
    /// The calendar date.
    pub holiday_date: NaiveDate,
    /// Display label, e.g. "Ziua Unirii".
    pub name: String,
}

impl Holiday {
    /// Creates a holiday.
    pub fn new(id: impl Into<String>, holiday_date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            holiday_date,
            name: name.into(),
        }
    }
}
