//! Recurring course slot model.
//!
//! A [`RecurringEvent`] is one weekly course slot: a day, a time range and a
//! recurrence tag. Everything else (title, room, professor, attributes) is
//! display metadata carried through the filter and layout untouched.
//!
//! # Time Model
//! Times are wall-clock times of day in the consumer's local calendar.
//! Layout works on minutes since midnight.

use std::collections::HashMap;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{DayOfWeek, Recurrence, WeekParity};

/// Course format, used for display color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CourseKind {
    /// "curs"
    Lecture,
    /// "seminar"
    Seminar,
    /// "laborator" / "lab"
    Laboratory,
    /// Anything else.
    #[default]
    Other,
}

impl CourseKind {
    /// Maps an upstream course type label (case-insensitive).
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "curs" | "course" | "lecture" => CourseKind::Lecture,
            "seminar" => CourseKind::Seminar,
            "laborator" | "lab" | "laboratory" => CourseKind::Laboratory,
            _ => CourseKind::Other,
        }
    }

    /// Display color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            CourseKind::Lecture => "#4285F4",
            CourseKind::Seminar => "#0F9D58",
            CourseKind::Laboratory => "#DB4437",
            CourseKind::Other => "#F4B400",
        }
    }
}

/// A weekly recurring course slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringEvent {
    /// Slot identifier.
    pub id: String,
    /// Day the slot occurs on.
    pub day_of_week: DayOfWeek,
    /// Start time (inclusive).
    pub start_time: NaiveTime,
    /// End time (exclusive).
    pub end_time: NaiveTime,
    /// Every week, odd weeks or even weeks.
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Course format.
    #[serde(default)]
    pub kind: CourseKind,
    /// Room label.
    #[serde(default)]
    pub room: Option<String>,
    /// Professor label.
    #[serde(default)]
    pub professor: Option<String>,
    /// Opaque pass-through metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl RecurringEvent {
    /// Creates a weekly slot.
    pub fn new(
        id: impl Into<String>,
        day_of_week: DayOfWeek,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            day_of_week,
            start_time,
            end_time,
            recurrence: Recurrence::Weekly,
            title: String::new(),
            kind: CourseKind::Other,
            room: None,
            professor: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the recurrence.
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the course kind.
    pub fn with_kind(mut self, kind: CourseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the professor label.
    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = Some(professor.into());
        self
    }

    /// Adds a pass-through attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Start as minutes since midnight.
    #[inline]
    pub fn start_minute(&self) -> u32 {
        minute_of_day(self.start_time)
    }

    /// End as minutes since midnight.
    #[inline]
    pub fn end_minute(&self) -> u32 {
        minute_of_day(self.end_time)
    }

    /// Duration in minutes (0 if the range is empty or inverted).
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute().saturating_sub(self.start_minute())
    }

    /// Whether this slot runs on `day` in a week of `parity`.
    pub fn occurs_on(&self, day: DayOfWeek, parity: WeekParity) -> bool {
        self.day_of_week == day && self.recurrence.matches(parity)
    }

    /// Display color derived from the course kind.
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

/// Minutes since midnight, seconds truncated.
#[inline]
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
