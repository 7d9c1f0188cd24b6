//! Period and holiday resolution.
//!
//! Classifies a calendar date against academic periods and holidays and
//! computes the continuous teaching-week number used for odd/even parity.
//!
//! # Date Equality
//! Every comparison happens on [`NaiveDate`] values. Inputs carrying a
//! time of day are reduced to their calendar day in their *own* offset via
//! [`CalendarDay`]: a `DateTime<Local>` at 00:30 on 1 May is 1 May, whatever
//! UTC says. Nothing is serialized through UTC before comparing.
//!
//! # Failure Semantics
//! Empty inputs match nothing. No function here returns an error.

mod semester;
mod week;

pub use semester::{current_semester, select_periods, semester_start_date, teaching_start_dates};
pub use week::{
    calculate_academic_week, calculate_week_parity, first_monday, period_week_count,
    WeekResolution,
};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::models::{AcademicPeriod, Holiday};

/// A value that denotes a calendar day in the consumer's local calendar.
pub trait CalendarDay {
    /// The year/month/day this value falls on, time of day dropped.
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Returns the holiday falling on `date`, if any.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timetable::models::Holiday;
/// use u_timetable::resolver::is_holiday;
///
/// let may_day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let holidays = vec![Holiday::new("h1", may_day, "Ziua Muncii")];
///
/// let at_noon = may_day.and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(is_holiday(at_noon, &holidays).map(|h| h.name.as_str()), Some("Ziua Muncii"));
/// assert!(is_holiday(may_day.succ_opt().unwrap(), &holidays).is_none());
/// ```
pub fn is_holiday(date: impl CalendarDay, holidays: &[Holiday]) -> Option<&Holiday> {
    let day = date.calendar_day();
    holidays.iter().find(|h| h.holiday_date == day)
}

/// Whether `date` lies inside at least one period (both ends inclusive).
pub fn is_in_academic_period(date: impl CalendarDay, periods: &[AcademicPeriod]) -> bool {
    let day = date.calendar_day();
    periods.iter().any(|p| p.contains(day))
}
