//! Input validation for academic schedules and course slots.
//!
//! Checks structural integrity of the reference data before it is queried.
//! Detects:
//! - Duplicate IDs (periods, holidays, slots)
//! - Inverted periods (`start_date > end_date`)
//! - Empty or inverted slot time ranges
//! - Overlapping periods
//! - Holidays declared twice for the same date
//!
//! The resolver and filter tolerate all of these, so callers treat the
//! result as a report rather than a gate.

use std::collections::HashSet;

use crate::models::{AcademicSchedule, RecurringEvent};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A period ends before it starts.
    InvertedPeriod,
    /// A slot ends at or before its start.
    EmptyTimeRange,
    /// Two periods share at least one date.
    OverlappingPeriods,
    /// Two holidays fall on the same date.
    DuplicateHolidayDate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule snapshot together with the slots queried against it.
///
/// Checks:
/// 1. No duplicate period, holiday or slot IDs
/// 2. Every period has `start_date <= end_date`
/// 3. Every slot has `start_time < end_time`
/// 4. No two well-formed periods share a date
/// 5. No two holidays share a date
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &AcademicSchedule, events: &[RecurringEvent]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut period_ids = HashSet::new();
    for p in &schedule.periods {
        if !period_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate period ID: {}", p.id),
            ));
        }
        if p.start_date > p.end_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedPeriod,
                format!(
                    "Period '{}' ends ({}) before it starts ({})",
                    p.id, p.end_date, p.start_date
                ),
            ));
        }
    }

    let mut holiday_ids = HashSet::new();
    let mut holiday_dates = HashSet::new();
    for h in &schedule.holidays {
        if !holiday_ids.insert(h.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate holiday ID: {}", h.id),
            ));
        }
        if !holiday_dates.insert(h.holiday_date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateHolidayDate,
                format!("Holiday '{}' repeats date {}", h.id, h.holiday_date),
            ));
        }
    }

    let mut event_ids = HashSet::new();
    for e in events {
        if !event_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event ID: {}", e.id),
            ));
        }
        if e.start_time >= e.end_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTimeRange,
                format!(
                    "Event '{}' has an empty time range {}-{}",
                    e.id, e.start_time, e.end_time
                ),
            ));
        }
    }

    errors.extend(detect_period_overlaps(schedule));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports each period that starts on or before the latest end seen so far.
///
/// # Algorithm
/// Sort well-formed periods by start date and sweep, tracking the period
/// with the latest end date.
fn detect_period_overlaps(schedule: &AcademicSchedule) -> Vec<ValidationError> {
    let mut periods: Vec<_> = schedule
        .periods
        .iter()
        .filter(|p| p.start_date <= p.end_date)
        .collect();
    periods.sort_by_key(|p| p.start_date);

    let mut errors = Vec::new();
    let mut reach = match periods.first() {
        Some(first) => *first,
        None => return errors,
    };
    for &p in periods.iter().skip(1) {
        if p.start_date <= reach.end_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverlappingPeriods,
                format!("Period '{}' overlaps period '{}'", p.id, reach.id),
            ));
        }
        if p.end_date > reach.end_date {
            reach = p;
        }
    }
    errors
}
