//! Continuous teaching-week numbering across academic periods.
//!
//! # Algorithm
//!
//! 1. Sort periods by `start_date` (stable, so equal starts keep input order).
//! 2. Find the first period containing the date; none → week 0.
//! 3. Every earlier period contributes its Monday-aligned week count
//!    `ceil((end - first_monday + 1) / 7)`.
//! 4. Inside the containing period the 0-based index is
//!    `floor((date - first_monday) / 7)`.
//! 5. `week = accumulated + index + 1`.
//!
//! Numbering therefore continues across a break or an exam session instead
//! of restarting, which keeps odd/even lab rotations aligned for the whole
//! semester.
//!
//! # Monday Alignment
//! A period's first Monday is the Monday of the Sunday–Saturday week that
//! contains its start date: a Sunday start rolls forward one day, Tuesday to
//! Saturday starts roll back to that week's Monday. A period starting
//! mid-week therefore counts its partial first week as week one. A Sunday
//! start date sits one day before its first Monday, gets index -1 and so
//! belongs to the previous week number.
//!
//! # Complexity
//! O(p log p) per call for p periods. Nothing is cached between calls.

use chrono::{Datelike, Duration, NaiveDate};

use super::CalendarDay;
use crate::models::{AcademicPeriod, WeekParity};

/// Week number of a date and the period it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekResolution<'a> {
    /// The period containing the date, if any.
    pub containing_period: Option<&'a AcademicPeriod>,
    /// Continuous week number, 1 for a semester's first week. 0 when no
    /// period contains the date, or for the Sunday start day of the first
    /// period.
    pub week_number: u32,
}

impl<'a> WeekResolution<'a> {
    /// Resolution for a date outside every period.
    pub const OUTSIDE: WeekResolution<'static> = WeekResolution {
        containing_period: None,
        week_number: 0,
    };

    /// Parity of the resolved week.
    ///
    /// Inside a period, week 0 counts as even.
    pub fn parity(&self) -> WeekParity {
        match self.containing_period {
            Some(_) if self.week_number % 2 == 1 => WeekParity::Odd,
            Some(_) => WeekParity::Even,
            None => WeekParity::None,
        }
    }
}

/// Monday that anchors week counting for a period starting on `start`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timetable::resolver::first_monday;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 2, day).unwrap();
/// assert_eq!(first_monday(d(3)), d(3));  // Monday
/// assert_eq!(first_monday(d(5)), d(3));  // Wednesday → same week's Monday
/// assert_eq!(first_monday(d(9)), d(10)); // Sunday → next day
/// ```
pub fn first_monday(start: NaiveDate) -> NaiveDate {
    match start.weekday().num_days_from_sunday() {
        0 => start + Duration::days(1),
        dow => start - Duration::days(i64::from(dow) - 1),
    }
}

/// Number of Monday-aligned weeks a period spans (0 for an inverted period).
pub fn period_week_count(period: &AcademicPeriod) -> u32 {
    let days = (period.end_date - first_monday(period.start_date)).num_days() + 1;
    if days <= 0 {
        return 0;
    }
    u32::try_from((days + 6) / 7).unwrap_or(u32::MAX)
}

/// Computes the continuous teaching-week number of `date`.
///
/// Pass only the periods of one semester (see
/// [`select_periods`](super::select_periods)); every period sorted before
/// the containing one adds to the count.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timetable::models::AcademicPeriod;
/// use u_timetable::resolver::calculate_academic_week;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
/// let periods = vec![
///     AcademicPeriod::new("teaching-1", d(2, 3), d(3, 14), 2),
///     AcademicPeriod::new("teaching-2", d(3, 31), d(6, 13), 2),
/// ];
///
/// // 2025-02-03 .. 2025-03-14 spans six Monday-aligned weeks,
/// // so the first Monday after the break is week 7.
/// let res = calculate_academic_week(d(3, 31), &periods);
/// assert_eq!(res.week_number, 7);
/// assert_eq!(res.containing_period.unwrap().id, "teaching-2");
/// ```
pub fn calculate_academic_week(
    date: impl CalendarDay,
    periods: &[AcademicPeriod],
) -> WeekResolution<'_> {
    let day = date.calendar_day();

    let mut sorted: Vec<&AcademicPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.start_date);

    let Some(index) = sorted.iter().position(|p| p.contains(day)) else {
        return WeekResolution::OUTSIDE;
    };
    let current = sorted[index];

    let accumulated: u32 = sorted[..index]
        .iter()
        .map(|p| period_week_count(p))
        .fold(0u32, u32::saturating_add);

    let offset_days = (day - first_monday(current.start_date)).num_days();
    let week = i64::from(accumulated) + offset_days.div_euclid(7) + 1;
    let week_number = u32::try_from(week.max(0)).unwrap_or(u32::MAX);
    tracing::trace!(
        date = %day,
        period = %current.id,
        accumulated,
        week_number,
        "resolved teaching week"
    );

    WeekResolution {
        containing_period: Some(current),
        week_number,
    }
}

/// Parity of the teaching week containing `date`.
///
/// `WeekParity::None` when no period contains the date.
pub fn calculate_week_parity(date: impl CalendarDay, periods: &[AcademicPeriod]) -> WeekParity {
    calculate_academic_week(date, periods).parity()
}
