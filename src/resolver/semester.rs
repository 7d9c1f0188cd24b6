//! Semester selection.
//!
//! Week numbering must only see the periods of one semester, and in the
//! second semester final-year students follow a different calendar (their
//! exam session and graduation periods are scoped `terminal`). These helpers
//! pick the right periods out of the full academic-year list.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AcademicPeriod, AcademicSchedule, Holiday};

/// Earliest start date among the periods of `semester`.
pub fn semester_start_date(periods: &[AcademicPeriod], semester: u8) -> Option<NaiveDate> {
    periods
        .iter()
        .filter(|p| p.semester == semester)
        .map(|p| p.start_date)
        .min()
}

/// Earliest start date of each semester, counting only teaching periods.
///
/// `teaching_type` is matched against `period_type` exactly.
pub fn teaching_start_dates(
    periods: &[AcademicPeriod],
    teaching_type: &str,
) -> BTreeMap<u8, NaiveDate> {
    let mut starts = BTreeMap::new();
    for p in periods.iter().filter(|p| p.period_type == teaching_type) {
        starts
            .entry(p.semester)
            .and_modify(|d: &mut NaiveDate| *d = (*d).min(p.start_date))
            .or_insert(p.start_date);
    }
    starts
}

/// Semester in effect on `today`: 2 once second-semester teaching has
/// started, otherwise 1.
pub fn current_semester(periods: &[AcademicPeriod], today: NaiveDate, teaching_type: &str) -> u8 {
    match teaching_start_dates(periods, teaching_type).get(&2) {
        Some(&start) if today >= start => 2,
        _ => 1,
    }
}

/// Periods of `semester` that apply to a student.
///
/// In semester 2 a scoped period is kept only when its target matches the
/// student's year kind; unscoped periods are always kept. Semester 1 ignores
/// scopes.
pub fn select_periods(
    periods: &[AcademicPeriod],
    semester: u8,
    is_terminal: bool,
) -> Vec<AcademicPeriod> {
    periods
        .iter()
        .filter(|p| p.semester == semester)
        .filter(|p| {
            semester != 2
                || p.target
                    .as_ref()
                    .map_or(true, |target| target.applies_to(is_terminal))
        })
        .cloned()
        .collect()
}

impl AcademicSchedule {
    /// Builds the snapshot for one student from the unfiltered academic-year
    /// lists, picking the semester in effect on `today`.
    pub fn for_student(
        periods: &[AcademicPeriod],
        holidays: Vec<Holiday>,
        today: NaiveDate,
        is_terminal: bool,
        teaching_type: &str,
    ) -> Self {
        let semester = current_semester(periods, today, teaching_type);
        let selected = select_periods(periods, semester, is_terminal);
        tracing::debug!(
            semester,
            is_terminal,
            periods = selected.len(),
            holidays = holidays.len(),
            "assembled academic schedule"
        );
        Self {
            periods: selected,
            holidays,
            current_semester: semester,
            is_terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodTarget;

    const TEACHING: &str = "activitate didactică";

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn year() -> Vec<AcademicPeriod> {
        vec![
            AcademicPeriod::new("s1-t1", d(2024, 9, 30), d(2024, 12, 20), 1).with_type(TEACHING),
            AcademicPeriod::new("s1-t2", d(2025, 1, 6), d(2025, 1, 17), 1).with_type(TEACHING),
            AcademicPeriod::new("s1-ex", d(2025, 1, 20), d(2025, 2, 9), 1).with_type("sesiune"),
            AcademicPeriod::new("s2-t1", d(2025, 2, 24), d(2025, 4, 18), 2).with_type(TEACHING),
            AcademicPeriod::new("s2-t2-term", d(2025, 4, 28), d(2025, 5, 23), 2)
                .with_type(TEACHING)
                .with_target(PeriodTarget::Terminal),
            AcademicPeriod::new("s2-t2-nonterm", d(2025, 4, 28), d(2025, 6, 6), 2)
                .with_type(TEACHING)
                .with_target(PeriodTarget::NonTerminal),
        ]
    }

    #[test]
    fn test_semester_start_date() {
        let periods = year();
        assert_eq!(semester_start_date(&periods, 1), Some(d(2024, 9, 30)));
        assert_eq!(semester_start_date(&periods, 2), Some(d(2025, 2, 24)));
        assert_eq!(semester_start_date(&periods, 3), None);
        assert_eq!(semester_start_date(&[], 1), None);
    }

    #[test]
    fn test_teaching_start_dates_skip_other_types() {
        let mut periods = year();
        periods.push(AcademicPeriod::new("early", d(2025, 2, 10), d(2025, 2, 14), 2).with_type("practica"));
        let starts = teaching_start_dates(&periods, TEACHING);
        assert_eq!(starts.get(&1), Some(&d(2024, 9, 30)));
        assert_eq!(starts.get(&2), Some(&d(2025, 2, 24)));
    }

    #[test]
    fn test_current_semester() {
        let periods = year();
        assert_eq!(current_semester(&periods, d(2024, 11, 1), TEACHING), 1);
        assert_eq!(current_semester(&periods, d(2025, 2, 23), TEACHING), 1);
        assert_eq!(current_semester(&periods, d(2025, 2, 24), TEACHING), 2);
        assert_eq!(current_semester(&[], d(2025, 2, 24), TEACHING), 1);
    }

    #[test]
    fn test_select_periods_semester_two_scoping() {
        let periods = year();
        let ids = |v: Vec<AcademicPeriod>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(
            ids(select_periods(&periods, 2, true)),
            vec!["s2-t1", "s2-t2-term"]
        );
        assert_eq!(
            ids(select_periods(&periods, 2, false)),
            vec!["s2-t1", "s2-t2-nonterm"]
        );
    }

    #[test]
    fn test_select_periods_semester_one_ignores_scope() {
        let mut periods = year();
        periods.push(
            AcademicPeriod::new("s1-scoped", d(2025, 2, 10), d(2025, 2, 14), 1)
                .with_target(PeriodTarget::Terminal),
        );
        assert_eq!(select_periods(&periods, 1, false).len(), 4);
    }

    #[test]
    fn test_unknown_target_excluded_in_semester_two() {
        let periods = vec![AcademicPeriod::new("odd", d(2025, 3, 1), d(2025, 3, 2), 2)
            .with_target(PeriodTarget::Other("master".into()))];
        assert!(select_periods(&periods, 2, true).is_empty());
        assert!(select_periods(&periods, 2, false).is_empty());
    }

    #[test]
    fn test_for_student() {
        let holidays = vec![Holiday::new("h", d(2025, 5, 1), "Ziua Muncii")];
        let s = AcademicSchedule::for_student(&year(), holidays, d(2025, 3, 10), true, TEACHING);
        assert_eq!(s.current_semester, 2);
        assert!(s.is_terminal);
        assert_eq!(s.periods.len(), 2);
        assert_eq!(s.holidays.len(), 1);
    }
}
