//! Conversion of upstream course rows into [`RecurringEvent`]s.
//!
//! Course rows arrive as loosely typed JSON: day names in Romanian or
//! English with or without diacritics, times as `HH:MM` or `HH:MM:SS`, and
//! a `frequency` that may be a number or a numeric string. Rows that cannot
//! be converted are dropped with a warning instead of failing the batch.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, TimetableError};
use crate::models::{CourseKind, DayOfWeek, Recurrence, RecurringEvent};

/// Title used when a row carries none.
pub const UNNAMED_COURSE: &str = "Unnamed Course";

/// A `frequency` value as sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyValue {
    Code(i64),
    Text(String),
}

impl FrequencyValue {
    /// Resolves the value to a [`Recurrence`].
    pub fn to_recurrence(&self) -> Result<Recurrence> {
        match self {
            FrequencyValue::Code(code) => Recurrence::from_code(*code),
            FrequencyValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(Recurrence::Weekly);
                }
                trimmed
                    .parse::<i64>()
                    .map_err(|_| TimetableError::InvalidRecurrence(trimmed.to_string()))
                    .and_then(Recurrence::from_code)
            }
        }
    }
}

/// One course row from the timetable API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRecord {
    #[serde(alias = "course_id", deserialize_with = "id_string")]
    pub id: Option<String>,
    #[serde(alias = "title")]
    pub name: Option<String>,
    #[serde(alias = "courseType")]
    pub course_type: Option<String>,
    #[serde(alias = "dayOfWeek", alias = "day_of_week")]
    pub day: Option<String>,
    #[serde(alias = "startTime")]
    pub start_time: Option<String>,
    #[serde(alias = "endTime")]
    pub end_time: Option<String>,
    pub frequency: Option<FrequencyValue>,
    #[serde(deserialize_with = "id_string")]
    pub room_id: Option<String>,
    pub room_name: Option<String>,
    #[serde(deserialize_with = "id_string")]
    pub professor_id: Option<String>,
    pub professor_name: Option<String>,
}

impl CourseRecord {
    /// Converts the row into a slot.
    ///
    /// The day and both times are required. A missing `frequency` means
    /// weekly and a missing name becomes [`UNNAMED_COURSE`]. Room and
    /// professor fall back from display name to id.
    pub fn to_event(&self) -> Result<RecurringEvent> {
        let day_label = self.day.as_deref().unwrap_or_default();
        let day: DayOfWeek = day_label.parse()?;
        let start = parse_time_of_day(self.start_time.as_deref().unwrap_or_default())?;
        let end = parse_time_of_day(self.end_time.as_deref().unwrap_or_default())?;
        let recurrence = match &self.frequency {
            Some(value) => value.to_recurrence()?,
            None => Recurrence::Weekly,
        };

        let title = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED_COURSE);

        let mut event = RecurringEvent::new(self.id.clone().unwrap_or_default(), day, start, end)
            .with_recurrence(recurrence)
            .with_title(title);

        if let Some(label) = &self.course_type {
            event = event
                .with_kind(CourseKind::from_label(label))
                .with_attribute("course_type", label.as_str());
        }
        if let Some(room) = non_empty(&self.room_name).or(non_empty(&self.room_id)) {
            event = event.with_room(room);
        }
        if let Some(professor) = non_empty(&self.professor_name).or(non_empty(&self.professor_id)) {
            event = event.with_professor(professor);
        }
        if let Some(room_id) = non_empty(&self.room_id) {
            event = event.with_attribute("room_id", room_id);
        }
        if let Some(professor_id) = non_empty(&self.professor_id) {
            event = event.with_attribute("professor_id", professor_id);
        }

        Ok(event)
    }
}

/// Accepts ids sent as either numbers or strings.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    }))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| TimetableError::InvalidTime(trimmed.to_string()))
}

/// Converts a batch of rows, dropping the ones that fail.
///
/// Rows without an id get `course-<index>` so that every slot stays
/// addressable.
pub fn ingest_courses(records: &[CourseRecord]) -> Vec<RecurringEvent> {
    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match record.to_event() {
            Ok(mut event) => {
                if event.id.trim().is_empty() {
                    event.id = format!("course-{index}");
                }
                events.push(event);
            }
            Err(err) => {
                tracing::warn!(index, id = ?record.id, error = %err, "dropping course row");
            }
        }
    }
    tracing::debug!(accepted = events.len(), total = records.len(), "ingested course rows");
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekParity;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time_of_day("08:00").unwrap(), t(8, 0));
        assert_eq!(parse_time_of_day("14:30:00").unwrap(), t(14, 30));
        assert_eq!(parse_time_of_day(" 09:15 ").unwrap(), t(9, 15));
        assert_eq!(
            parse_time_of_day("noon"),
            Err(TimetableError::InvalidTime("noon".into()))
        );
        assert!(parse_time_of_day("").is_err());
    }

    #[test]
    fn test_frequency_values() {
        assert_eq!(FrequencyValue::Code(1).to_recurrence(), Ok(Recurrence::OddWeeks));
        assert_eq!(
            FrequencyValue::Text("2".into()).to_recurrence(),
            Ok(Recurrence::EvenWeeks)
        );
        assert_eq!(FrequencyValue::Text("".into()).to_recurrence(), Ok(Recurrence::Weekly));
        assert!(FrequencyValue::Text("biweekly".into()).to_recurrence().is_err());
        assert!(FrequencyValue::Code(5).to_recurrence().is_err());
    }

    #[test]
    fn test_record_from_api_json() {
        let json = r#"{
            "course_id": "42",
            "name": "Algoritmi",
            "course_type": "Laborator",
            "day": "Miercuri",
            "start_time": "10:00:00",
            "end_time": "12:00:00",
            "frequency": "1",
            "room_id": "r7",
            "room_name": "C112",
            "professor_id": "p3"
        }"#;
        let record: CourseRecord = serde_json::from_str(json).unwrap();
        let event = record.to_event().unwrap();

        assert_eq!(event.id, "42");
        assert_eq!(event.title, "Algoritmi");
        assert_eq!(event.day_of_week, DayOfWeek::Wednesday);
        assert_eq!(event.start_time, t(10, 0));
        assert_eq!(event.end_time, t(12, 0));
        assert_eq!(event.recurrence, Recurrence::OddWeeks);
        assert_eq!(event.kind, CourseKind::Laboratory);
        assert_eq!(event.room.as_deref(), Some("C112"));
        assert_eq!(event.professor.as_deref(), Some("p3"));
        assert_eq!(event.attributes.get("room_id").map(String::as_str), Some("r7"));
        assert!(event.occurs_on(DayOfWeek::Wednesday, WeekParity::Odd));
    }

    #[test]
    fn test_record_defaults() {
        let record = CourseRecord {
            day: Some("marti".into()),
            start_time: Some("08:00".into()),
            end_time: Some("09:40".into()),
            ..Default::default()
        };
        let event = record.to_event().unwrap();
        assert_eq!(event.title, UNNAMED_COURSE);
        assert_eq!(event.recurrence, Recurrence::Weekly);
        assert_eq!(event.kind, CourseKind::Other);
        assert_eq!(event.day_of_week, DayOfWeek::Tuesday);
        assert!(event.room.is_none());
    }

    #[test]
    fn test_record_errors() {
        let base = CourseRecord {
            day: Some("Luni".into()),
            start_time: Some("08:00".into()),
            end_time: Some("10:00".into()),
            ..Default::default()
        };

        let bad_day = CourseRecord {
            day: Some("Funday".into()),
            ..base.clone()
        };
        assert!(matches!(bad_day.to_event(), Err(TimetableError::InvalidDay(_))));

        let bad_time = CourseRecord {
            end_time: None,
            ..base.clone()
        };
        assert!(matches!(bad_time.to_event(), Err(TimetableError::InvalidTime(_))));

        let bad_frequency = CourseRecord {
            frequency: Some(FrequencyValue::Code(9)),
            ..base
        };
        assert!(matches!(
            bad_frequency.to_event(),
            Err(TimetableError::InvalidRecurrence(_))
        ));
    }

    #[test]
    fn test_ingest_drops_bad_rows_and_fills_ids() {
        let json = r#"[
            {"name": "A", "day": "Luni", "start_time": "08:00", "end_time": "10:00"},
            {"name": "B", "day": "Someday", "start_time": "08:00", "end_time": "10:00"},
            {"course_id": 17, "name": "C", "dayOfWeek": "Vineri", "start_time": "12:00", "end_time": "14:00", "frequency": 2}
        ]"#;
        let records: Vec<CourseRecord> = serde_json::from_str(json).unwrap();
        let events = ingest_courses(&records);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "course-0");
        assert_eq!(events[1].id, "17");
        assert_eq!(events[1].day_of_week, DayOfWeek::Friday);
        assert_eq!(events[1].recurrence, Recurrence::EvenWeeks);
    }
}
