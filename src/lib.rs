//! Academic calendar resolution and timetable layout.
//!
//! Answers, for a concrete date, which recurring course slots take place
//! (given academic periods, holidays and odd/even week recurrence), and how
//! the slots of one day are arranged into side-by-side columns when their
//! times overlap.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `AcademicPeriod`, `Holiday`,
//!   `AcademicSchedule`, `RecurringEvent`, `Recurrence`, `WeekParity`,
//!   `DayOfWeek`
//! - **`resolver`**: Holiday lookup, period membership, continuous
//!   academic week numbering and parity, semester selection
//! - **`filter`**: Slots taking place on a date
//! - **`layout`**: Overlap clustering, column assignment, box geometry
//! - **`ingest`**: Upstream course rows to `RecurringEvent`s
//! - **`timetable`**: Day and week views combining all of the above
//! - **`validation`**: Input integrity checks (duplicate IDs, inverted
//!   ranges, overlapping periods)
//! - **`config`**: TOML configuration for the hour grid, layout strategy
//!   and academic defaults
//!
//! # Quick Start
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use u_timetable::{AcademicPeriod, AcademicSchedule, DayOfWeek, RecurringEvent};
//! use u_timetable::{Timetable, TimetableConfig};
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
//! let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
//!
//! let schedule = AcademicSchedule::new(vec![AcademicPeriod::new("s2", d(2, 24), d(6, 6), 2)], vec![]);
//! let events = vec![
//!     RecurringEvent::new("math", DayOfWeek::Monday, t(8), t(10)),
//!     RecurringEvent::new("lab", DayOfWeek::Monday, t(9), t(11)),
//! ];
//!
//! let timetable = Timetable::new(Some(schedule), events, TimetableConfig::default());
//! let monday = timetable.day(d(3, 3));
//! assert_eq!(monday.events.len(), 2);
//! assert!(monday.events.iter().all(|e| e.column_count == 2));
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)
//! - ISO 8601 week dates (Monday-start weeks)

pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod layout;
pub mod models;
pub mod resolver;
pub mod timetable;
pub mod validation;

pub use config::TimetableConfig;
pub use error::{Result, TimetableError};
pub use filter::{classify_date, events_for_date, DayStatus};
pub use layout::{arrange_overlapping_events, LaidOutEvent, LayoutStrategy};
pub use models::{
    AcademicPeriod, AcademicSchedule, DayOfWeek, Holiday, Recurrence, RecurringEvent, WeekParity,
};
pub use resolver::{calculate_academic_week, calculate_week_parity, is_holiday, is_in_academic_period};
pub use timetable::{DayAgenda, Timetable};
