//! Closed day-of-week enumeration.
//!
//! Upstream course rows name their day in free text, with or without
//! diacritics ("Marți", "Marti", "marti"). Names are normalized exactly once,
//! when a row becomes a [`RecurringEvent`](super::RecurringEvent); after that
//! every comparison is a plain enum equality.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::TimetableError;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Day of the week of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// 0-based index, Monday = 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Romanian display name, with diacritics.
    pub fn romanian_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Luni",
            DayOfWeek::Tuesday => "Marți",
            DayOfWeek::Wednesday => "Miercuri",
            DayOfWeek::Thursday => "Joi",
            DayOfWeek::Friday => "Vineri",
            DayOfWeek::Saturday => "Sâmbătă",
            DayOfWeek::Sunday => "Duminică",
        }
    }

    /// Parses a free-text day name.
    ///
    /// Accepts Romanian and English names in any case, with or without
    /// diacritics. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        let day = match normalize_day_name(name).as_str() {
            "luni" | "monday" => DayOfWeek::Monday,
            "marti" | "tuesday" => DayOfWeek::Tuesday,
            "miercuri" | "wednesday" => DayOfWeek::Wednesday,
            "joi" | "thursday" => DayOfWeek::Thursday,
            "vineri" | "friday" => DayOfWeek::Friday,
            "sambata" | "saturday" => DayOfWeek::Saturday,
            "duminica" | "sunday" => DayOfWeek::Sunday,
            _ => return None,
        };
        Some(day)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TimetableError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Strips combining diacritical marks (U+0300..U+036F) after NFD
/// decomposition, trims, and lowercases.
pub fn normalize_day_name(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
}
