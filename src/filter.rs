//! Recurring event filtering for a concrete date.
//!
//! # Algorithm
//!
//! 1. A holiday shows nothing.
//! 2. A date outside every academic period shows nothing.
//! 3. A date without a teaching-week parity shows nothing.
//! 4. Otherwise keep every slot on the date's weekday whose recurrence is
//!    weekly or matches the week's parity.
//!
//! The filter is pure: identical inputs give identical output, and the
//! output keeps the input order of `events`.

use chrono::NaiveDate;

use crate::models::{AcademicSchedule, DayOfWeek, Holiday, Recurrence, RecurringEvent, WeekParity};
use crate::resolver::{calculate_academic_week, is_holiday, is_in_academic_period, CalendarDay};

/// Why a date does or does not show courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus<'a> {
    /// Non-teaching holiday.
    Holiday(&'a Holiday),
    /// Not inside any academic period.
    OutsidePeriod,
    /// A teaching day.
    Teaching {
        /// Continuous week number (1-based).
        week_number: u32,
        /// Odd or even.
        parity: WeekParity,
    },
}

impl DayStatus<'_> {
    /// Parity to filter with; `None` unless this is a teaching day.
    pub fn parity(&self) -> WeekParity {
        match self {
            DayStatus::Teaching { parity, .. } => *parity,
            _ => WeekParity::None,
        }
    }

    /// Whether courses can occur on this day.
    pub fn is_teaching(&self) -> bool {
        matches!(self, DayStatus::Teaching { .. })
    }
}

/// Classifies `date` against a schedule. Holidays take precedence.
pub fn classify_date(date: impl CalendarDay, schedule: &AcademicSchedule) -> DayStatus<'_> {
    let day = date.calendar_day();

    if let Some(holiday) = is_holiday(day, &schedule.holidays) {
        return DayStatus::Holiday(holiday);
    }
    if !is_in_academic_period(day, &schedule.periods) {
        return DayStatus::OutsidePeriod;
    }

    let resolution = calculate_academic_week(day, &schedule.periods);
    match resolution.parity() {
        WeekParity::None => DayStatus::OutsidePeriod,
        parity => DayStatus::Teaching {
            week_number: resolution.week_number,
            parity,
        },
    }
}

/// Returns the slots that take place on `date`.
///
/// # Example
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use u_timetable::filter::events_for_date;
/// use u_timetable::models::{AcademicPeriod, AcademicSchedule, DayOfWeek, Recurrence, RecurringEvent};
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
///
/// let schedule = AcademicSchedule::new(
///     vec![AcademicPeriod::new("s2", d(2, 3), d(6, 13), 2)],
///     vec![],
/// );
/// let events = vec![
///     RecurringEvent::new("odd", DayOfWeek::Monday, t(8), t(10)).with_recurrence(Recurrence::OddWeeks),
///     RecurringEvent::new("even", DayOfWeek::Monday, t(8), t(10)).with_recurrence(Recurrence::EvenWeeks),
/// ];
///
/// // 2025-02-17 is the Monday of week 3.
/// let today = events_for_date(d(2, 17), &events, &schedule);
/// assert_eq!(today.len(), 1);
/// assert_eq!(today[0].id, "odd");
/// ```
pub fn events_for_date<'e>(
    date: impl CalendarDay,
    events: &'e [RecurringEvent],
    schedule: &AcademicSchedule,
) -> Vec<&'e RecurringEvent> {
    let day = date.calendar_day();
    let status = classify_date(day, schedule);
    if !status.is_teaching() {
        tracing::debug!(date = %day, ?status, "no teaching on date");
        return Vec::new();
    }
    select_for_day(day, status.parity(), events)
}

/// Filters slots without an academic schedule.
///
/// Parity is counted in seven-day blocks from `anchor` (a semester start):
/// the block starting on the anchor is odd and blocks alternate from there.
/// Before the anchor there is no parity and only weekly slots run. No
/// holiday or period checks are made.
pub fn events_for_date_anchored(
    date: impl CalendarDay,
    events: &[RecurringEvent],
    anchor: NaiveDate,
) -> Vec<&RecurringEvent> {
    let day = date.calendar_day();
    match anchored_parity(day, anchor) {
        WeekParity::None => {
            let weekday = DayOfWeek::of(day);
            events
                .iter()
                .filter(|e| e.day_of_week == weekday && e.recurrence == Recurrence::Weekly)
                .collect()
        }
        parity => select_for_day(day, parity, events),
    }
}

/// Parity of `date` counted in whole weeks from `anchor`.
///
/// `WeekParity::None` for dates before the anchor.
pub fn anchored_parity(date: NaiveDate, anchor: NaiveDate) -> WeekParity {
    if date < anchor {
        return WeekParity::None;
    }
    let weeks = (date - anchor).num_days() / 7;
    if weeks % 2 == 0 {
        WeekParity::Odd
    } else {
        WeekParity::Even
    }
}

fn select_for_day(
    date: NaiveDate,
    parity: WeekParity,
    events: &[RecurringEvent],
) -> Vec<&RecurringEvent> {
    let day = DayOfWeek::of(date);
    events.iter().filter(|e| e.occurs_on(day, parity)).collect()
}
