//! Day and week views over a student's timetable.
//!
//! [`Timetable`] owns the reference data (schedule snapshot, slots, config)
//! and answers "what is on this date, and where is it drawn?" by running the
//! date filter and then the overlap layout.
//!
//! Without an academic schedule the facade falls back to anchor-based
//! parity when `academic.fallback_anchor` is configured, and shows nothing
//! otherwise.

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::{GridConfig, TimetableConfig};
use crate::filter::{anchored_parity, classify_date, events_for_date, events_for_date_anchored, DayStatus};
use crate::ingest::{ingest_courses, CourseRecord};
use crate::layout::{arrange_with, event_box, EventBox, LaidOutEvent};
use crate::models::{AcademicPeriod, AcademicSchedule, DayOfWeek, Holiday, RecurringEvent, WeekParity};
use crate::resolver::CalendarDay;
use crate::validation::validate_schedule;

/// Monday through Sunday of the week containing `date`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timetable::timetable::week_days;
///
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// let days = week_days(sunday);
/// assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
/// assert_eq!(days[6], sunday);
/// ```
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// One date with its status and laid-out slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAgenda<'t> {
    /// The calendar date.
    pub date: NaiveDate,
    /// Holiday, outside any period, or teaching day.
    pub status: DayStatus<'t>,
    /// The holiday on this date, if any.
    pub holiday: Option<&'t Holiday>,
    /// Slots taking place, sorted by start time, with their columns.
    pub events: Vec<LaidOutEvent<&'t RecurringEvent>>,
}

impl<'t> DayAgenda<'t> {
    /// Weekday of the agenda's date.
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::of(self.date)
    }

    /// Whether no slot takes place.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Box geometry of every slot on `grid`.
    pub fn boxes(&self, grid: &GridConfig) -> Vec<(&'t RecurringEvent, EventBox)> {
        self.events
            .iter()
            .map(|laid| (laid.event, event_box(laid, grid)))
            .collect()
    }
}

/// A student's timetable: schedule snapshot, course slots and settings.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    schedule: Option<AcademicSchedule>,
    events: Vec<RecurringEvent>,
    config: TimetableConfig,
}

impl Timetable {
    /// Creates a timetable, logging any validation issues.
    ///
    /// Issues are reported at `warn` and never rejected: every query
    /// degrades gracefully on malformed reference data.
    pub fn new(
        schedule: Option<AcademicSchedule>,
        events: Vec<RecurringEvent>,
        config: TimetableConfig,
    ) -> Self {
        let empty = AcademicSchedule::default();
        let checked = schedule.as_ref().unwrap_or(&empty);
        if let Err(errors) = validate_schedule(checked, &events) {
            for error in &errors {
                tracing::warn!(kind = ?error.kind, "{}", error.message);
            }
        }
        tracing::debug!(
            has_schedule = schedule.is_some(),
            events = events.len(),
            strategy = ?config.layout.strategy,
            "timetable ready"
        );
        Self {
            schedule,
            events,
            config,
        }
    }

    /// Creates a timetable from raw course rows, dropping unusable rows.
    pub fn from_courses(
        schedule: Option<AcademicSchedule>,
        records: &[CourseRecord],
        config: TimetableConfig,
    ) -> Self {
        Self::new(schedule, ingest_courses(records), config)
    }

    /// Creates a timetable from the full academic-year lists.
    ///
    /// The semester in effect on `today` is detected from teaching periods
    /// labelled `config.academic.teaching_period_type`, and only the periods
    /// of that semester applying to the student are kept.
    pub fn for_student(
        periods: &[AcademicPeriod],
        holidays: Vec<Holiday>,
        today: NaiveDate,
        is_terminal: bool,
        events: Vec<RecurringEvent>,
        config: TimetableConfig,
    ) -> Self {
        let schedule = AcademicSchedule::for_student(
            periods,
            holidays,
            today,
            is_terminal,
            &config.academic.teaching_period_type,
        );
        Self::new(Some(schedule), events, config)
    }

    /// The academic schedule, if one was loaded.
    pub fn schedule(&self) -> Option<&AcademicSchedule> {
        self.schedule.as_ref()
    }

    /// All course slots.
    pub fn events(&self) -> &[RecurringEvent] {
        &self.events
    }

    /// Active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Status of `date`.
    ///
    /// Without a schedule, a configured anchor makes every date a teaching
    /// day whose week number counts seven-day blocks from the anchor. Dates
    /// before the anchor are week 0 with `WeekParity::None`, on which only
    /// weekly slots run.
    pub fn status(&self, date: impl CalendarDay) -> DayStatus<'_> {
        let day = date.calendar_day();
        match (&self.schedule, self.config.academic.fallback_anchor) {
            (Some(schedule), _) => classify_date(day, schedule),
            (None, Some(anchor)) => {
                let parity = anchored_parity(day, anchor);
                let week_number = match parity {
                    WeekParity::None => 0,
                    _ => u32::try_from((day - anchor).num_days() / 7 + 1).unwrap_or(u32::MAX),
                };
                DayStatus::Teaching {
                    week_number,
                    parity,
                }
            }
            (None, None) => DayStatus::OutsidePeriod,
        }
    }

    /// Slots on `date`, laid out with the configured strategy.
    pub fn day(&self, date: impl CalendarDay) -> DayAgenda<'_> {
        let day = date.calendar_day();
        let status = self.status(day);
        let holiday = match status {
            DayStatus::Holiday(h) => Some(h),
            _ => None,
        };

        let selected = match (&self.schedule, self.config.academic.fallback_anchor) {
            (Some(schedule), _) => events_for_date(day, &self.events, schedule),
            (None, Some(anchor)) => events_for_date_anchored(day, &self.events, anchor),
            (None, None) => Vec::new(),
        };
        let events = arrange_with(selected, self.config.layout.strategy);
        tracing::trace!(date = %day, events = events.len(), "built day agenda");

        DayAgenda {
            date: day,
            status,
            holiday,
            events,
        }
    }

    /// Agendas for Monday through Sunday of the week containing `date`.
    pub fn week(&self, date: impl CalendarDay) -> Vec<DayAgenda<'_>> {
        week_days(date.calendar_day())
            .into_iter()
            .map(|d| self.day(d))
            .collect()
    }
}
